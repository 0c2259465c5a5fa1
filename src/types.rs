//! Result types returned by validation and strength evaluation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discrete strength classification of a password.
///
/// `None` is reserved for the empty input; every non-empty password
/// maps onto the other five levels through [`StrengthLevel::from_score`].
/// Levels are ordered, so callers can compare them directly
/// (`level >= StrengthLevel::Fair`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrengthLevel {
    None,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl StrengthLevel {
    /// Maps a normalized score in `[0, 5]` onto a level.
    pub fn from_score(score: f64) -> Self {
        if score < 1.0 {
            StrengthLevel::VeryWeak
        } else if score < 2.0 {
            StrengthLevel::Weak
        } else if score < 3.0 {
            StrengthLevel::Fair
        } else if score < 4.0 {
            StrengthLevel::Good
        } else {
            StrengthLevel::Excellent
        }
    }

    /// Stable machine-readable tag, also the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::None => "none",
            StrengthLevel::VeryWeak => "very-weak",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Fair => "fair",
            StrengthLevel::Good => "good",
            StrengthLevel::Excellent => "excellent",
        }
    }

    /// Human-readable label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::None => "Enter a password",
            StrengthLevel::VeryWeak => "Very weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a strength evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrengthResult {
    /// Normalized score in `[0, 5]`.
    pub score: f64,
    pub level: StrengthLevel,
    /// The level's label, ready for display.
    pub message: String,
}

/// Outcome of a policy validation.
///
/// `message` names the first violated rule, or confirms acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_thresholds() {
        assert_eq!(StrengthLevel::from_score(0.0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(0.99), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(1.0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(2.0), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(2.99), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(3.0), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(4.0), StrengthLevel::Excellent);
        assert_eq!(StrengthLevel::from_score(5.0), StrengthLevel::Excellent);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(StrengthLevel::None < StrengthLevel::VeryWeak);
        assert!(StrengthLevel::VeryWeak < StrengthLevel::Weak);
        assert!(StrengthLevel::Weak < StrengthLevel::Fair);
        assert!(StrengthLevel::Fair < StrengthLevel::Good);
        assert!(StrengthLevel::Good < StrengthLevel::Excellent);
    }

    #[test]
    fn test_tags_and_labels() {
        assert_eq!(StrengthLevel::VeryWeak.as_str(), "very-weak");
        assert_eq!(StrengthLevel::Excellent.as_str(), "excellent");
        assert_eq!(StrengthLevel::None.label(), "Enter a password");
        assert_eq!(StrengthLevel::Fair.label(), "Fair");
        assert_eq!(StrengthLevel::Weak.to_string(), "weak");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_level_serializes_to_kebab_tag() {
        let json = serde_json::to_string(&StrengthLevel::VeryWeak).unwrap();
        assert_eq!(json, "\"very-weak\"");

        let back: StrengthLevel = serde_json::from_str("\"excellent\"").unwrap();
        assert_eq!(back, StrengthLevel::Excellent);
    }
}
