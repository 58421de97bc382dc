#[path = "../common/mod.rs"]
mod common;

use magtrack::prelude::*;

#[test]
fn trailing_track_two_is_ignored() {
    let track = TrackOne::parse(common::fixtures::two_track_swipe());
    assert_eq!(track.raw_track_data(), common::fixtures::track_one());
    assert_eq!(track.discretionary_data(), "4567890123");
    assert!(track.has_service_code());
}

#[test]
fn trailing_tracks_two_and_three_are_ignored() {
    let track = TrackOne::parse(common::fixtures::three_track_swipe());
    assert_eq!(track.raw_track_data(), common::fixtures::track_one());
    assert_eq!(track.service_code().raw(), "123");
}

#[test]
fn track_two_alone_does_not_match() {
    let track = TrackOne::parse(common::fixtures::track_two());
    assert_eq!(track, TrackOne::default());
    assert_eq!(track.raw_track_data(), "");
    assert_eq!(track.discretionary_data(), "");
    assert_eq!(track.format_code(), "");
}

#[test]
fn noise_yields_no_fields() {
    for raw in ["", " ", "\n\n", "%", "%B", "?;=", "%B4111111111111111?"] {
        let track = TrackOne::parse(raw);
        assert!(!track.has_raw_track_data(), "input {:?}", raw);
        assert!(!track.has_format_code());
        assert!(!track.has_primary_account_number());
        assert!(!track.has_name());
        assert!(!track.has_expiration_date());
        assert!(!track.has_service_code());
        assert!(!track.exceeds_maximum_length());
    }
}

#[test]
fn missing_end_sentinel_is_tolerated() {
    let raw = common::fixtures::track_one();
    let truncated = raw.trim_end_matches('?');
    let track = TrackOne::parse(truncated);
    assert_eq!(track.raw_track_data(), truncated);
    assert_eq!(track.discretionary_data(), "4567890123");
}

#[test]
fn missing_start_sentinel_is_tolerated() {
    let raw = common::fixtures::track_one();
    let stripped = raw.trim_start_matches('%');
    let track = TrackOne::parse(stripped);
    assert_eq!(track.raw_track_data(), stripped);
    assert_eq!(track.format_code(), "B");
}

#[test]
fn lowercase_format_code_is_rejected() {
    assert_eq!(
        TrackOne::parse("%b4111111111111111^DOE/JOHN^2505101?"),
        TrackOne::default()
    );
}

#[test]
fn content_directly_after_end_sentinel_is_ignored() {
    let raw = common::fixtures::track_one();
    let track = TrackOne::parse(format!("{}X", raw));
    assert_eq!(track.raw_track_data(), raw);
    assert_eq!(track.discretionary_data(), "4567890123");
    assert!(track.has_service_code());
}

#[test]
fn content_after_three_spaces_is_ignored() {
    let raw = common::fixtures::track_one();
    let track = TrackOne::parse(format!("{}   {}", raw, common::fixtures::track_two()));
    assert_eq!(track.raw_track_data(), raw);
    assert!(track.has_expiration_date());
}

#[test]
fn tracks_separated_by_line_breaks_still_yield_track_one() {
    let raw = common::fixtures::track_one();
    let swipe = format!("{}\r\n;4111=2505?\r\n;0112=33?", raw);
    let track = TrackOne::parse(&swipe);
    assert_eq!(track.raw_track_data(), raw);
    assert_eq!(TrackOne::try_parse(&swipe), Ok(track));
}
