//! Password strength rating.
//!
//! Raw scoring sits behind [`StrengthScorer`]; [`evaluate`] maps the score id
//! onto [`StrengthLevel`].

use thiserror::Error;

use super::Password;

/// Ordinal strength rating. Ids line up with scorer ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthLevel {
    TooWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 4] = [
        StrengthLevel::TooWeak,
        StrengthLevel::Weak,
        StrengthLevel::Medium,
        StrengthLevel::Strong,
    ];

    pub fn from_id(id: usize) -> Result<Self, UnknownStrengthId> {
        Self::ALL.get(id).copied().ok_or(UnknownStrengthId(id))
    }

    pub fn id(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::TooWeak => "Too Weak!",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

/// A scorer returned an id with no matching [`StrengthLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("password strength id {0} is not a known strength level")]
pub struct UnknownStrengthId(pub usize);

/// Scores a password on an ordinal scale starting at 0.
pub trait StrengthScorer {
    fn score(&self, password: &str) -> usize;
}

impl<F: Fn(&str) -> usize> StrengthScorer for F {
    fn score(&self, password: &str) -> usize {
        self(password)
    }
}

/// Rate `password` with `scorer`.
pub fn evaluate<S: StrengthScorer + ?Sized>(
    password: &Password,
    scorer: &S,
) -> Result<StrengthLevel, UnknownStrengthId> {
    StrengthLevel::from_id(scorer.score(password.as_str()))
}

struct Rule {
    min_diversity: usize,
    min_length: usize,
}

// Indexed by id.
const RULES: [Rule; 4] = [
    Rule { min_diversity: 0, min_length: 0 },
    Rule { min_diversity: 2, min_length: 6 },
    Rule { min_diversity: 4, min_length: 8 },
    Rule { min_diversity: 4, min_length: 10 },
];

/// Length and diversity scorer.
///
/// Diversity counts the kinds present among lowercase, uppercase, digits and
/// ASCII punctuation. The score is the highest rule both thresholds meet:
///
/// | id | diversity | length |
/// |----|-----------|--------|
/// | 0  | 0         | 0      |
/// | 1  | 2         | 6      |
/// | 2  | 4         | 8      |
/// | 3  | 4         | 10     |
#[derive(Debug, Clone, Copy, Default)]
pub struct DiversityScorer;

impl DiversityScorer {
    pub fn diversity(password: &str) -> usize {
        let kinds: [fn(&char) -> bool; 4] = [
            char::is_ascii_lowercase,
            char::is_ascii_uppercase,
            char::is_ascii_digit,
            char::is_ascii_punctuation,
        ];
        kinds
            .iter()
            .filter(|kind| password.chars().any(|c| kind(&c)))
            .count()
    }
}

impl StrengthScorer for DiversityScorer {
    fn score(&self, password: &str) -> usize {
        let diversity = Self::diversity(password);
        let length = password.chars().count();
        RULES
            .iter()
            .rposition(|r| diversity >= r.min_diversity && length >= r.min_length)
            .unwrap_or(0)
    }
}
