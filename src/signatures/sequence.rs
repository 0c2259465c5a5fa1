//! Sequential-run signature: alphabet, digit and keyboard-row runs.

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const KEYBOARD_ROWS: &str = "qwertyuiopasdfghjklzxcvbnm";

const RUN_LENGTH: usize = 4;

/// Checks the lower-cased password for any 4-character slice of a
/// reference sequence, taken forward or reversed.
pub(crate) fn matches_sequential_run(pwd: &str) -> bool {
    let lowered = pwd.to_lowercase();

    for reference in [ALPHABET, DIGITS, KEYBOARD_ROWS] {
        let chars: Vec<char> = reference.chars().collect();
        for window in chars.windows(RUN_LENGTH) {
            let forward: String = window.iter().collect();
            let reversed: String = window.iter().rev().collect();
            if lowered.contains(&forward) || lowered.contains(&reversed) {
                return true;
            }
        }
    }
    false
}
