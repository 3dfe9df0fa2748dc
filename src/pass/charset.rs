//! Character classes, their pools, and classification.
//!
//! [`SYMBOLS`] is the only symbol table in the crate. Drawing a symbol and
//! recognising one both read it, so the pool and the classifier cannot drift.

use rand::Rng;
use thiserror::Error;

const UPPERCASE: (u8, u8) = (b'A', b'Z');
const LOWERCASE: (u8, u8) = (b'a', b'z');
const DIGITS: (u8, u8) = (b'0', b'9');

/// Punctuation eligible under [`CharClass::Symbol`].
pub const SYMBOLS: &[char] = &['!', '#', '$', '&', '*', '+', '>', '<', '?', '@', '^', '~'];

/// A category of password characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Number,
    Symbol,
}

impl CharClass {
    /// All classes in canonical order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Number,
        CharClass::Symbol,
    ];

    /// Number of characters in this class's pool.
    pub fn pool_size(self) -> usize {
        match self {
            CharClass::Uppercase => span(UPPERCASE),
            CharClass::Lowercase => span(LOWERCASE),
            CharClass::Number => span(DIGITS),
            CharClass::Symbol => SYMBOLS.len(),
        }
    }

    /// Draw one character uniformly from this class's pool.
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        match self {
            CharClass::Uppercase => char::from(rng.gen_range(UPPERCASE.0..=UPPERCASE.1)),
            CharClass::Lowercase => char::from(rng.gen_range(LOWERCASE.0..=LOWERCASE.1)),
            CharClass::Number => char::from(rng.gen_range(DIGITS.0..=DIGITS.1)),
            CharClass::Symbol => SYMBOLS[rng.gen_range(0..=SYMBOLS.len() - 1)],
        }
    }

    /// Every character this class can produce, in pool order.
    pub fn pool(self) -> Vec<char> {
        match self {
            CharClass::Uppercase => (UPPERCASE.0..=UPPERCASE.1).map(char::from).collect(),
            CharClass::Lowercase => (LOWERCASE.0..=LOWERCASE.1).map(char::from).collect(),
            CharClass::Number => (DIGITS.0..=DIGITS.1).map(char::from).collect(),
            CharClass::Symbol => SYMBOLS.to_vec(),
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

#[inline]
fn span((lo, hi): (u8, u8)) -> usize {
    usize::from(hi - lo) + 1
}

#[inline]
fn in_range(c: char, (lo, hi): (u8, u8)) -> bool {
    (u32::from(lo)..=u32::from(hi)).contains(&u32::from(c))
}

/// A character that belongs to none of the pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0:?} is not an expected character type")]
pub struct UnclassifiableCharacter(pub char);

/// Map a character to its class.
pub fn classify(c: char) -> Result<CharClass, UnclassifiableCharacter> {
    if in_range(c, UPPERCASE) {
        Ok(CharClass::Uppercase)
    } else if in_range(c, LOWERCASE) {
        Ok(CharClass::Lowercase)
    } else if in_range(c, DIGITS) {
        Ok(CharClass::Number)
    } else if SYMBOLS.contains(&c) {
        Ok(CharClass::Symbol)
    } else {
        Err(UnclassifiableCharacter(c))
    }
}

/// A set of character classes, iterated in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn classify_ascii_ranges() {
        assert_eq!(classify('A'), Ok(CharClass::Uppercase));
        assert_eq!(classify('Z'), Ok(CharClass::Uppercase));
        assert_eq!(classify('a'), Ok(CharClass::Lowercase));
        assert_eq!(classify('z'), Ok(CharClass::Lowercase));
        assert_eq!(classify('0'), Ok(CharClass::Number));
        assert_eq!(classify('9'), Ok(CharClass::Number));
        assert_eq!(classify('~'), Ok(CharClass::Symbol));
    }

    #[test]
    fn punctuation_outside_symbol_table_is_rejected() {
        for c in ['%', '"', '\'', '(', '-', '_', ' ', '[', 'é', '\n'] {
            assert_eq!(classify(c), Err(UnclassifiableCharacter(c)), "{c:?}");
        }
    }

    #[test]
    fn error_names_the_character() {
        assert_eq!(
            UnclassifiableCharacter('%').to_string(),
            "'%' is not an expected character type"
        );
    }

    #[test]
    fn every_pool_character_classifies_into_its_class() {
        for class in CharClass::ALL {
            let pool = class.pool();
            assert_eq!(pool.len(), class.pool_size());
            for c in pool {
                assert_eq!(classify(c), Ok(class), "{c:?} from {class:?}");
            }
        }
    }

    #[test]
    fn drawn_characters_stay_in_their_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for class in CharClass::ALL {
            let pool = class.pool();
            for _ in 0..500 {
                let c = class.draw(&mut rng);
                assert!(pool.contains(&c), "{c:?} not in {class:?} pool");
            }
        }
    }

    #[test]
    fn draw_reaches_both_ends_of_each_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        for class in CharClass::ALL {
            let pool = class.pool();
            let drawn: Vec<char> = (0..2_000).map(|_| class.draw(&mut rng)).collect();
            assert!(drawn.contains(pool.first().unwrap()));
            assert!(drawn.contains(pool.last().unwrap()));
        }
    }

    #[test]
    fn class_set_iterates_in_canonical_order() {
        let set: ClassSet = [CharClass::Symbol, CharClass::Uppercase, CharClass::Symbol]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![CharClass::Uppercase, CharClass::Symbol]
        );
        assert!(!set.contains(CharClass::Number));
        assert!(ClassSet::empty().is_empty());
    }
}
