//! Policy validation - ordered hard acceptance rules.

use secrecy::{ExposeSecret, SecretString};

use crate::signatures::is_weak_by_signature;
use crate::strength::{contains_special, evaluate_strength, SPECIAL_CHARS};
use crate::types::ValidationResult;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;
/// Minimum normalized strength score, level `Fair`.
const MIN_SCORE: f64 = 3.0;

/// Validates a password against the acceptance policy.
///
/// Rules run in fixed order: required, length bounds, character
/// classes, weak-signature check, strength gate. The first failing
/// rule short-circuits and its message is returned; failures are
/// never aggregated.
pub fn validate_password(password: &SecretString) -> ValidationResult {
    let rules: [fn(&SecretString) -> Option<String>; 9] = [
        required,
        min_length,
        max_length,
        has_lowercase,
        has_uppercase,
        has_digit,
        has_special,
        not_guessable,
        strong_enough,
    ];

    for rule in rules {
        if let Some(message) = rule(password) {
            return ValidationResult { valid: false, message };
        }
    }

    ValidationResult {
        valid: true,
        message: "Valid password.".to_string(),
    }
}

fn required(password: &SecretString) -> Option<String> {
    if password.expose_secret().is_empty() {
        return Some("Password is required.".to_string());
    }
    None
}

fn min_length(password: &SecretString) -> Option<String> {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!("Password must be at least {} characters.", MIN_LENGTH));
    }
    None
}

fn max_length(password: &SecretString) -> Option<String> {
    if password.expose_secret().chars().count() > MAX_LENGTH {
        return Some(format!("Password must be at most {} characters.", MAX_LENGTH));
    }
    None
}

fn has_lowercase(password: &SecretString) -> Option<String> {
    if !password.expose_secret().chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain a lowercase letter.".to_string());
    }
    None
}

fn has_uppercase(password: &SecretString) -> Option<String> {
    if !password.expose_secret().chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain an uppercase letter.".to_string());
    }
    None
}

fn has_digit(password: &SecretString) -> Option<String> {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain a digit.".to_string());
    }
    None
}

fn has_special(password: &SecretString) -> Option<String> {
    if !contains_special(password.expose_secret()) {
        return Some(format!(
            "Password must contain a special character ({}).",
            SPECIAL_CHARS
        ));
    }
    None
}

fn not_guessable(password: &SecretString) -> Option<String> {
    if is_weak_by_signature(password) {
        return Some(
            "Password is too common or guessable. Choose something more complex.".to_string(),
        );
    }
    None
}

fn strong_enough(password: &SecretString) -> Option<String> {
    let strength = evaluate_strength(password);
    if strength.score < MIN_SCORE {
        return Some(format!(
            "Password is too weak. Current strength: {} (minimum 'Fair' required).",
            strength.level.label()
        ));
    }
    None
}
