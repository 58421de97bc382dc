// magtrack-rs/magtrack/src/constants.rs
//! Track 1 layout constants from ISO/IEC 7813

/// Start sentinel preceding the format code
pub const START_SENTINEL: char = '%';

/// End sentinel following the discretionary data
pub const END_SENTINEL: char = '?';

/// Field separator between PAN, name and the expiration/service section.
/// Also stands in for an absent expiration date or service code.
pub const FIELD_SEPARATOR: char = '^';

/// Separator between surname and given names inside the name field
pub const NAME_SEPARATOR: char = '/';

/// Maximum Track 1 record length in characters, sentinels included
pub const TRACK1_MAX_LENGTH: usize = 79;

/// Maximum number of digits in a primary account number
pub const PAN_MAX_DIGITS: usize = 19;

/// Shortest name the grammar accepts
pub const NAME_MIN_LEN: usize = 2;
/// Longest name the grammar accepts
pub const NAME_MAX_LEN: usize = 26;

/// Expiration date width (`YYMM`)
pub const EXPIRATION_DATE_LEN: usize = 4;
/// Service code width
pub const SERVICE_CODE_LEN: usize = 3;
