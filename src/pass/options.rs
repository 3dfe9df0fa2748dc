//! Form options and their validation.

use thiserror::Error;

use super::charset::{CharClass, ClassSet};

pub const CHAR_LENGTH_MIN: usize = 1;
pub const CHAR_LENGTH_MAX: usize = 20;

/// What the user picked on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub char_length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Options {
    /// Whether `class` is enabled.
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Number => self.include_numbers,
            CharClass::Symbol => self.include_symbols,
        }
    }

    /// Enable or disable `class`.
    pub fn set(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Uppercase => self.include_uppercase = enabled,
            CharClass::Lowercase => self.include_lowercase = enabled,
            CharClass::Number => self.include_numbers = enabled,
            CharClass::Symbol => self.include_symbols = enabled,
        }
    }

    pub fn selected_classes(&self) -> ClassSet {
        CharClass::ALL
            .into_iter()
            .filter(|c| self.includes(*c))
            .collect()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            char_length: 10,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

/// Why a set of options cannot be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No character types selected")]
    NoClassesSelected,
    #[error("Character length not long enough (need {required}, got {length})")]
    LengthTooShort { length: usize, required: usize },
    #[error("Character length {length} is over the maximum of {max}")]
    LengthTooLong { length: usize, max: usize },
}

/// A validated generation request: at least one class, and enough length to
/// fit one character of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }
}

/// Check `options` and turn them into a [`GenerationRequest`].
pub fn validate(options: &Options) -> Result<GenerationRequest, ValidationError> {
    let classes = options.selected_classes();

    if classes.is_empty() {
        return Err(ValidationError::NoClassesSelected);
    }
    if options.char_length < classes.len() {
        return Err(ValidationError::LengthTooShort {
            length: options.char_length,
            required: classes.len(),
        });
    }
    if options.char_length > CHAR_LENGTH_MAX {
        return Err(ValidationError::LengthTooLong {
            length: options.char_length,
            max: CHAR_LENGTH_MAX,
        });
    }

    Ok(GenerationRequest {
        length: options.char_length,
        classes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(len: usize, upper: bool, lower: bool, numbers: bool, symbols: bool) -> Options {
        Options {
            char_length: len,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn two_classes_fit_in_two_characters() {
        let request = validate(&options(2, true, true, false, false)).unwrap();
        assert_eq!(request.length(), 2);
        assert_eq!(
            request.classes().iter().collect::<Vec<_>>(),
            vec![CharClass::Uppercase, CharClass::Lowercase]
        );
    }

    #[test]
    fn nothing_selected_is_rejected() {
        assert_eq!(
            validate(&options(10, false, false, false, false)),
            Err(ValidationError::NoClassesSelected)
        );
    }

    #[test]
    fn three_classes_do_not_fit_in_two_characters() {
        assert_eq!(
            validate(&options(2, true, true, true, false)),
            Err(ValidationError::LengthTooShort { length: 2, required: 3 })
        );
    }

    #[test]
    fn zero_length_is_always_rejected() {
        assert_eq!(
            validate(&options(0, false, false, false, true)),
            Err(ValidationError::LengthTooShort { length: 0, required: 1 })
        );
        assert_eq!(
            validate(&options(0, false, false, false, false)),
            Err(ValidationError::NoClassesSelected)
        );
    }

    #[test]
    fn length_bounds() {
        assert!(validate(&options(CHAR_LENGTH_MIN, false, false, true, false)).is_ok());
        assert!(validate(&options(CHAR_LENGTH_MAX, true, true, true, true)).is_ok());
        assert_eq!(
            validate(&options(CHAR_LENGTH_MAX + 1, true, false, false, false)),
            Err(ValidationError::LengthTooLong { length: 21, max: 20 })
        );
    }

    #[test]
    fn validation_is_pure() {
        let opts = options(7, false, true, true, true);
        assert_eq!(validate(&opts), validate(&opts));
        let bad = options(1, true, true, false, false);
        assert_eq!(validate(&bad), validate(&bad));
    }

    #[test]
    fn default_options_select_nothing() {
        let opts = Options::default();
        assert_eq!(opts.char_length, 10);
        assert!(opts.selected_classes().is_empty());
    }

    #[test]
    fn set_and_includes_agree() {
        let mut opts = Options::default();
        for class in CharClass::ALL {
            opts.set(class, true);
            assert!(opts.includes(class));
        }
        assert_eq!(opts.selected_classes().len(), 4);
        opts.set(CharClass::Number, false);
        assert!(!opts.include_numbers);
    }
}
