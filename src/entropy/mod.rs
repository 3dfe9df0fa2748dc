//! Process-wide random source.
//!
//! The thread-local CSPRNG by default; the operating system's entropy source
//! (`getrandom`, `/dev/urandom`) when enabled.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::{OsRng, ThreadRng};
use rand::{RngCore, thread_rng};

static USE_OS: AtomicBool = AtomicBool::new(false);

/// Draw every value straight from the operating system from now on.
pub fn enable_os() {
    USE_OS.store(true, Ordering::SeqCst);
}

pub fn is_os_enabled() -> bool {
    USE_OS.load(Ordering::Relaxed)
}

/// Name of the active source.
pub fn source_name() -> &'static str {
    if is_os_enabled() {
        "OS entropy (getrandom)"
    } else {
        "thread CSPRNG (ChaCha, OS-seeded)"
    }
}

/// The active source.
pub enum Entropy {
    Thread(ThreadRng),
    Os(OsRng),
}

/// Handle on the active source.
pub fn rng() -> Entropy {
    if is_os_enabled() {
        Entropy::Os(OsRng)
    } else {
        Entropy::Thread(thread_rng())
    }
}

impl RngCore for Entropy {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Entropy::Thread(r) => r.next_u32(),
            Entropy::Os(r) => r.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Entropy::Thread(r) => r.next_u64(),
            Entropy::Os(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Entropy::Thread(r) => r.fill_bytes(dest),
            Entropy::Os(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Entropy::Thread(r) => r.try_fill_bytes(dest),
            Entropy::Os(r) => r.try_fill_bytes(dest),
        }
    }
}
