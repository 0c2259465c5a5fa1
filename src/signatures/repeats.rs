//! Repetition signatures: runs of one character and copied blocks.

/// Three or more identical consecutive characters. Case-sensitive,
/// so "aaA" is not a run.
pub(crate) fn matches_repeated_char(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// A leading block of 2+ characters copied back-to-back ("ababab",
/// "123123x"). Only a repeated prefix of 4+ characters counts;
/// repetition further into the password is tolerated.
pub(crate) fn matches_repeated_block(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    let len = chars.len();

    for block_len in 2..=len / 2 {
        let repeated_len = block_len * (len / block_len);
        if repeated_len < 4 {
            continue;
        }

        let block = &chars[..block_len];
        if chars[..repeated_len].chunks(block_len).all(|chunk| chunk == block) {
            return true;
        }
    }
    false
}
