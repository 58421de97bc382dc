// fixtures.rs: sample swipes as card readers deliver them

pub const SAMPLE_PAN: &str = "4111111111111111";
pub const SAMPLE_NAME: &str = "DOE/JOHN";

/// Track 1 only, both sentinels present.
pub fn track_one() -> String {
    format!("%B{}^{}^25051234567890123?", SAMPLE_PAN, SAMPLE_NAME)
}

/// Track 2 as it follows track 1 on a combined read.
pub fn track_two() -> String {
    format!(";{}=25051010000000000000?", SAMPLE_PAN)
}

/// Track 3, rarely populated on bank cards but present on some readers.
pub fn track_three() -> String {
    ";011234567890123456=724724100000000000030300XXXX040400099010=************************==1=0000000000000000?".to_string()
}

/// Tracks 1 and 2 separated by a newline, with the reader's trailing CR/LF.
pub fn two_track_swipe() -> String {
    format!("{}\n{}\r\n", track_one(), track_two())
}

/// All three tracks separated by CR/LF.
pub fn three_track_swipe() -> String {
    format!("{}\r\n{}\r\n{}\r\n", track_one(), track_two(), track_three())
}

/// Record with expiration date and service code both replaced by `^`.
pub fn placeholder_track_one() -> String {
    format!("%B{}^{}^^^?", SAMPLE_PAN, SAMPLE_NAME)
}

/// Well-formed record with discretionary data pushing it past 79 characters.
pub fn oversized_track_one() -> String {
    format!("%B{}^{}^2505101{}?", SAMPLE_PAN, SAMPLE_NAME, "0".repeat(60))
}
