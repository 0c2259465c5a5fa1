//! Common-password signature: wordlist hits and padded variants.

use crate::wordlist;

/// Checks the lower-cased password against the wordlist.
///
/// A password matches when it equals an entry exactly, or when it
/// contains an entry and is at most 3 characters longer ("password12"
/// is still "password").
pub(crate) fn matches_common_password(pwd: &str) -> bool {
    let lowered = pwd.to_lowercase();
    let char_count = lowered.chars().count();

    wordlist::any_entry(|entry| {
        lowered == entry
            || (lowered.contains(entry) && char_count <= entry.chars().count() + 3)
    })
}
