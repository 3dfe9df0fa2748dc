//! Generated password buffer.

use std::fmt;

use zeroize::Zeroize;

/// A generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn with_capacity(len: usize) -> Self {
        Password(String::with_capacity(len))
    }

    pub(crate) fn push(&mut self, c: char) {
        self.0.push(c);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters. Every pool character is ASCII, so this is also
    /// the byte length.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.len())
    }
}

impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.zeroize();
    }
}
