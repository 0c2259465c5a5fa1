//! Strength scoring - turns structural signals into a normalized score.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;

use crate::signatures::is_weak_by_signature;
use crate::types::{StrengthLevel, StrengthResult};

/// Special characters accepted by the scorer and the policy.
pub(crate) const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Raw points available across all signals.
const RAW_SIGNAL_MAX: f64 = 9.0;
/// Ceiling of the normalized score.
const SCORE_MAX: f64 = 5.0;
/// `unique chars * log2(length)` must exceed this for the entropy bonus.
const ENTROPY_THRESHOLD: f64 = 30.0;

/// Evaluates password strength on a normalized 0-5 scale.
///
/// Six base signals (length >= 8, lowercase, uppercase, digit, special
/// character, no weak signature) and three bonus signals (length >= 12,
/// length >= 16, good entropy) each contribute one raw point; the raw
/// total is rescaled onto `[0, 5]`.
///
/// # Returns
/// A `StrengthResult` with the score, its level and the level's label.
/// An empty password short-circuits to score 0 and level `None`.
pub fn evaluate_strength(password: &SecretString) -> StrengthResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthResult {
            score: 0.0,
            level: StrengthLevel::None,
            message: StrengthLevel::None.label().to_string(),
        };
    }

    let char_count = pwd.chars().count();

    let signals = [
        char_count >= 8,
        pwd.chars().any(|c| c.is_ascii_lowercase()),
        pwd.chars().any(|c| c.is_ascii_uppercase()),
        pwd.chars().any(|c| c.is_ascii_digit()),
        contains_special(pwd),
        !is_weak_by_signature(password),
        char_count >= 12,
        char_count >= 16,
        has_good_entropy(pwd, char_count),
    ];
    let raw = signals.iter().filter(|&&signal| signal).count();

    let score = SCORE_MAX.min(raw as f64 * SCORE_MAX / RAW_SIGNAL_MAX);
    let level = StrengthLevel::from_score(score);

    StrengthResult {
        score,
        level,
        message: level.label().to_string(),
    }
}

pub(crate) fn contains_special(pwd: &str) -> bool {
    pwd.chars().any(|c| SPECIAL_CHARS.contains(c))
}

fn has_good_entropy(pwd: &str, char_count: usize) -> bool {
    let unique: HashSet<char> = pwd.chars().collect();
    unique.len() as f64 * (char_count as f64).log2() > ENTROPY_THRESHOLD
}
