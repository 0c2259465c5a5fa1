//! Personal-information signature: dates, years and long digit runs.

use regex::Regex;
use std::sync::LazyLock;

static BIRTH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}(0[1-9]|1[012])(0[1-9]|[12][0-9]|3[01])").expect("pattern compiles")
});

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(19|20)[0-9]{2}").expect("pattern compiles"));

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{6}").expect("pattern compiles"));

/// Flags digit substrings shaped like personal information: a
/// `YYYYMMDD` date, a 19xx/20xx year, or any 6 consecutive digits.
pub(crate) fn matches_personal_info(pwd: &str) -> bool {
    BIRTH_DATE.is_match(pwd) || YEAR.is_match(pwd) || DIGIT_RUN.is_match(pwd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_date() {
        assert!(matches_personal_info("kim19900101!"));
        assert!(matches_personal_info("x00051231x"));
    }

    #[test]
    fn test_year() {
        assert!(matches_personal_info("summer2024"));
        assert!(matches_personal_info("b1987man"));
    }

    #[test]
    fn test_digit_run() {
        assert!(matches_personal_info("pin777213ok"));
    }

    #[test]
    fn test_short_digit_groups_pass() {
        assert!(!matches_personal_info("Tr0ub4dor#Xyz"));
        assert!(!matches_personal_info("a12b34c56"));
        // Five digits, no year shape
        assert!(!matches_personal_info("x56781x"));
    }
}
