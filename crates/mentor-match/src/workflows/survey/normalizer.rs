pub(crate) fn strip_invisible(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "")
}

/// Canonical form of a `Computing id`: no invisible characters, trimmed, lowercase.
pub fn normalize_id(value: &str) -> String {
    strip_invisible(value).trim().to_lowercase()
}

/// Survey exports write missing answers as blanks or a literal `nan`.
pub(crate) fn is_blank(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}

/// Reads the leading run of digits, so `"3rd year"` becomes 3 and `"10 hours"` becomes 10.
pub(crate) fn leading_integer(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

pub(crate) fn is_affirmative(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}
