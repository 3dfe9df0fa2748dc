//! Password generation, classification, validation and strength rating.

pub mod charset;
pub mod generate;
pub mod options;
mod password;
pub mod strength;

use rand::Rng;
use thiserror::Error;

pub use charset::{CharClass, ClassSet, SYMBOLS, UnclassifiableCharacter, classify};
pub use generate::generate;
pub use options::{CHAR_LENGTH_MAX, CHAR_LENGTH_MIN, GenerationRequest, Options, ValidationError, validate};
pub use password::Password;
pub use strength::{DiversityScorer, StrengthLevel, StrengthScorer, UnknownStrengthId, evaluate};

/// A generated password with its rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub password: Password,
    pub strength: StrengthLevel,
}

/// Broken invariant inside the generator or the strength mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error(transparent)]
    Unclassifiable(#[from] UnclassifiableCharacter),
    #[error(transparent)]
    UnknownStrength(#[from] UnknownStrengthId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Encountered an internal error")]
    Internal(#[source] InternalError),
}

/// Log a broken invariant. Debug builds stop here; release builds hand the
/// caller a generic error.
fn internal<E: Into<InternalError>>(err: E) -> Error {
    let err = err.into();
    log::error!("internal error: {err}");
    if cfg!(debug_assertions) {
        panic!("internal error: {err}");
    }
    Error::Internal(err)
}

/// Validate `options`, generate a password from the process-wide entropy
/// source and rate it with [`DiversityScorer`].
pub fn generate_password(options: &Options) -> Result<Generated, Error> {
    generate_password_with(options, &mut crate::entropy::rng(), &DiversityScorer)
}

/// [`generate_password`] with an explicit random source and scorer.
pub fn generate_password_with<R, S>(
    options: &Options,
    rng: &mut R,
    scorer: &S,
) -> Result<Generated, Error>
where
    R: Rng + ?Sized,
    S: StrengthScorer + ?Sized,
{
    let request = validate(options)?;
    let password = generate(&request, rng).map_err(internal)?;
    let strength = evaluate(&password, scorer).map_err(internal)?;

    log::debug!(
        "generated {}-char password from {} class(es), strength {:?}",
        request.length(),
        request.classes().len(),
        strength
    );

    Ok(Generated { password, strength })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lowercase(len: usize) -> Options {
        Options {
            char_length: len,
            include_lowercase: true,
            ..Options::default()
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "internal error")]
    fn unknown_strength_id_panics_in_debug() {
        let mut rng = StdRng::seed_from_u64(3);
        let _ = generate_password_with(&lowercase(8), &mut rng, &|_: &str| 9usize);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn unknown_strength_id_is_generic_in_release() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = generate_password_with(&lowercase(8), &mut rng, &|_: &str| 9usize).unwrap_err();
        assert_eq!(
            err,
            Error::Internal(InternalError::UnknownStrength(UnknownStrengthId(9)))
        );
        assert_eq!(err.to_string(), "Encountered an internal error");
    }

    #[test]
    fn validation_errors_are_not_internal() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = generate_password_with(&lowercase(0), &mut rng, &|_: &str| 9usize).unwrap_err();
        assert_eq!(
            err,
            Error::Validation(ValidationError::LengthTooShort { length: 0, required: 1 })
        );
    }
}
