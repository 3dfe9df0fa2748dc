//! Password generation.

use rand::Rng;

use super::Password;
use super::charset::{CharClass, ClassSet, UnclassifiableCharacter, classify};
use super::options::GenerationRequest;

/// Draw one character: a uniform pick of class, then a uniform pick inside
/// that class's pool.
///
/// Classes with small pools are drawn as often as classes with large ones, so
/// the result is not uniform over the union of the pools.
///
/// # Panics
///
/// Panics if `classes` is empty.
#[inline]
pub fn draw_char<R: Rng + ?Sized>(classes: &[CharClass], rng: &mut R) -> char {
    let class = classes[rng.gen_range(0..=classes.len() - 1)];
    class.draw(rng)
}

/// Generate a password of `request.length()` characters containing every
/// requested class and nothing else.
///
/// Candidates are drawn whole and discarded until one covers every class.
/// The loop has no cap: an attempt succeeds whenever its first `k` draws land
/// on each of the `k` classes once, which happens with probability at least
/// `k! / k^k > 0`, and `GenerationRequest` guarantees `length >= k`.
pub fn generate<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Password, UnclassifiableCharacter> {
    let wanted = request.classes();
    let classes: Vec<CharClass> = wanted.iter().collect();
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;

        let mut candidate = Password::with_capacity(request.length());
        for _ in 0..request.length() {
            candidate.push(draw_char(&classes, rng));
        }

        // Rejected candidates are wiped when dropped.
        if classes_present(&candidate)? == wanted {
            log::trace!(
                "accepted {}-char candidate after {attempts} attempt(s)",
                request.length()
            );
            return Ok(candidate);
        }
    }
}

/// Classes represented in `password`.
pub fn classes_present(password: &Password) -> Result<ClassSet, UnclassifiableCharacter> {
    password.chars().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::pass::charset::SYMBOLS;
    use crate::pass::options::{CHAR_LENGTH_MAX, Options, validate};

    fn request(len: usize, classes: &[CharClass]) -> GenerationRequest {
        let mut opts = Options {
            char_length: len,
            ..Options::default()
        };
        for class in classes {
            opts.set(*class, true);
        }
        validate(&opts).expect("valid options")
    }

    #[test]
    fn draw_char_only_uses_given_classes() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let c = draw_char(&[CharClass::Number, CharClass::Symbol], &mut rng);
            assert!(c.is_ascii_digit() || SYMBOLS.contains(&c), "{c:?}");
        }
    }

    #[test]
    fn draw_char_picks_classes_evenly() {
        // Ten digits against twelve symbols: a uniform pick over the union
        // would give digits ~45%; the class-first pick gives ~50%.
        let mut rng = StdRng::seed_from_u64(2);
        let draws = 20_000;
        let digits = (0..draws)
            .filter(|_| draw_char(&[CharClass::Number, CharClass::Symbol], &mut rng).is_ascii_digit())
            .count();
        let share = digits as f64 / draws as f64;
        assert!((0.48..0.52).contains(&share), "digit share {share}");
    }

    #[test]
    fn every_class_appears_exactly() {
        let all = CharClass::ALL;
        let mut rng = StdRng::seed_from_u64(3);

        for mask in 1u8..16 {
            let chosen: Vec<CharClass> = all
                .iter()
                .copied()
                .filter(|c| mask & (1 << *c as u8) != 0)
                .collect();
            for len in chosen.len()..=CHAR_LENGTH_MAX {
                let req = request(len, &chosen);
                let password = generate(&req, &mut rng).unwrap();
                assert_eq!(password.len(), len);
                assert_eq!(classes_present(&password).unwrap(), req.classes());
            }
        }
    }

    #[test]
    fn length_equal_to_class_count_uses_one_of_each() {
        let mut rng = StdRng::seed_from_u64(4);
        let req = request(4, &CharClass::ALL);
        for _ in 0..50 {
            let password = generate(&req, &mut rng).unwrap();
            let mut classes: Vec<CharClass> =
                password.chars().map(|c| classify(c).unwrap()).collect();
            classes.sort();
            assert_eq!(classes, CharClass::ALL.to_vec());
        }
    }

    #[test]
    fn same_seed_same_password() {
        let req = request(16, &[CharClass::Lowercase, CharClass::Number]);
        let a = generate(&req, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate(&req, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
