//! Password generator core: pick a length and character classes, get a
//! password that uses every selected class, rated for strength.
//!
//! ```no_run
//! use passcraft::pass::{Options, generate_password};
//!
//! let options = Options {
//!     char_length: 16,
//!     include_uppercase: true,
//!     include_lowercase: true,
//!     include_numbers: true,
//!     include_symbols: false,
//! };
//! let generated = generate_password(&options).unwrap();
//! println!("{} ({})", generated.password.as_str(), generated.strength.label());
//! ```

pub mod entropy;
pub mod pass;
