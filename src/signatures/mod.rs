//! Weak-signature detection
//!
//! Each submodule recognizes one class of guessable structure.

mod common;
mod personal;
mod repeats;
mod sequence;

use secrecy::{ExposeSecret, SecretString};

/// Checks whether the password matches any known weak signature:
/// a common password (or a padded variant of one), a sequential run,
/// a repeated character or block, or personal-info-shaped digits.
///
/// An empty password is not weak-by-signature; emptiness is handled
/// by the policy layer.
pub fn is_weak_by_signature(password: &SecretString) -> bool {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return false;
    }

    common::matches_common_password(pwd)
        || sequence::matches_sequential_run(pwd)
        || repeats::matches_repeated_char(pwd)
        || repeats::matches_repeated_block(pwd)
        || personal::matches_personal_info(pwd)
}
