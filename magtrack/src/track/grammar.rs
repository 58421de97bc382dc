// magtrack-rs/magtrack/src/track/grammar.rs

//! Compiled Track 1 Format B pattern.
//!
//! Layout: `%` FC PAN `^` NAME `^` ED SC DD `?` followed by up to two
//! whitespace characters and anything else the reader appended (usually
//! track 2 and track 3). Sentinels are optional; ED is four digits or `^`;
//! SC is three digits, `^`, or missing.

use regex::Regex;
use std::sync::OnceLock;

use crate::constants::{
    END_SENTINEL, EXPIRATION_DATE_LEN, FIELD_SEPARATOR, NAME_MAX_LEN, NAME_MIN_LEN,
    PAN_MAX_DIGITS, SERVICE_CODE_LEN, START_SENTINEL,
};

/// Capture group holding the record from start sentinel to end sentinel.
pub const RAW_TRACK_DATA: usize = 1;
/// Capture group holding the single-letter format code.
pub const FORMAT_CODE: usize = 2;
/// Capture group holding the account number digits.
pub const PRIMARY_ACCOUNT_NUMBER: usize = 3;
/// Capture group holding the cardholder name.
pub const NAME: usize = 4;
/// Capture group holding `YYMM` or the `^` placeholder.
pub const EXPIRATION_DATE: usize = 5;
/// Capture group holding the service code or `^`; may not participate.
pub const SERVICE_CODE: usize = 6;
/// Capture group holding the discretionary data; may not participate.
pub const DISCRETIONARY_DATA: usize = 7;

fn escaped(c: char) -> String {
    regex::escape(&c.to_string())
}

/// Pattern source assembled from the layout constants.
///
/// The tail after the record uses `(?s:.*)`, so appended tracks separated
/// by CR/LF are discarded along with everything else. A line-bounded `.*`
/// would reject a three-track read whose tracks are separated by line
/// breaks; this pattern accepts it.
fn track_one_format_b_source() -> String {
    let start = escaped(START_SENTINEL);
    let end = escaped(END_SENTINEL);
    let sep = escaped(FIELD_SEPARATOR);
    format!(
        concat!(
            r"\A(",
            r"{start}?",
            r"([A-Z])",
            r"([0-9]{{1,{pan_max}}})",
            r"{sep}([^{sep}]{{{name_min},{name_max}}}){sep}",
            r"([0-9]{{{exp_len}}}|{sep})",
            r"([0-9]{{{svc_len}}}|{sep})?",
            r"([^{end}]+)?",
            r"{end}?",
            r")[\t\n\r ]{{0,2}}(?s:.*)\z",
        ),
        start = start,
        end = end,
        sep = sep,
        pan_max = PAN_MAX_DIGITS,
        name_min = NAME_MIN_LEN,
        name_max = NAME_MAX_LEN,
        exp_len = EXPIRATION_DATE_LEN,
        svc_len = SERVICE_CODE_LEN,
    )
}

static TRACK1_FORMAT_B_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached Track 1 Format B pattern.
pub fn track_one_format_b() -> &'static Regex {
    TRACK1_FORMAT_B_PATTERN.get_or_init(|| {
        Regex::new(&track_one_format_b_source()).expect("Invalid track 1 format B pattern")
    })
}
