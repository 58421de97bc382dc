//! Whitespace handling for raw swipe data.
//!
//! Card readers emit control characters (CR, LF, NUL padding) around track
//! data, so trimming treats every character at or below U+0020 as blank
//! rather than relying on Unicode whitespace classes.

fn is_trimmable(c: char) -> bool {
    c <= ' '
}

/// Strip leading and trailing control characters and spaces.
pub fn trim_to_empty(s: &str) -> &str {
    s.trim_matches(is_trimmable)
}

/// Same as [`trim_to_empty`] for an optional input; `None` becomes `""`.
pub fn trim_optional(s: Option<&str>) -> &str {
    s.map(trim_to_empty).unwrap_or("")
}

/// True when the string is empty or consists only of trimmable characters.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_trimmable)
}

/// True when every character is an ASCII digit. Empty input yields false.
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
