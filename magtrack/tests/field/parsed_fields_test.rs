#[path = "../common/mod.rs"]
mod common;

use magtrack::prelude::*;

#[test]
fn fields_from_sample_swipe() {
    let track = TrackOne::parse(common::fixtures::two_track_swipe());

    let pan = track.primary_account_number();
    assert_eq!(pan.last_four_digits(), Some("1111"));
    assert_eq!(pan.masked().as_deref(), Some("************1111"));

    let name = track.name();
    assert_eq!(name.last_name(), "DOE");
    assert_eq!(name.first_name(), "JOHN");

    let date = track.expiration_date();
    assert!(date.is_expired_at(2025, 6));
    assert!(!date.is_expired_at(2025, 5));
}

#[test]
fn service_code_positions_decode() {
    let track = TrackOne::parse("%B5500000000000004^SMITH/JANE^2812201?");
    let sc = track.service_code();
    assert_eq!(sc.interchange(), Some(Interchange::InternationalIntegratedCircuit));
    assert_eq!(sc.authorization_processing(), Some(AuthorizationProcessing::Normal));
    assert_eq!(sc.allowed_services(), Some(AllowedServices::NoRestrictions));
}

#[test]
fn invalid_month_is_matched_but_not_present() {
    // Four digits satisfy the grammar; the date type rejects month 13.
    let track = TrackOne::parse("%B5500000000000004^SMITH/JANE^2813201?");
    assert!(track.has_raw_track_data());
    assert_eq!(track.expiration_date().raw(), "2813");
    assert!(!track.has_expiration_date());
    assert!(track.has_service_code());
}

#[test]
fn default_fields_are_absent() {
    let track = TrackOne::default();
    assert!(!track.primary_account_number().is_present());
    assert!(!track.name().is_present());
    assert!(!track.expiration_date().is_present());
    assert!(!track.service_code().is_present());
    assert_eq!(track.primary_account_number().masked(), None);
    assert_eq!(track.service_code().interchange(), None);
}

#[test]
fn strict_field_constructors() {
    assert!(ServiceCode::try_from("201").is_ok());
    assert!(ExpirationDate::try_from("2913").is_err());
    assert!(Name::try_from("").is_err());
    assert!(PrimaryAccountNumber::try_from("4111111111111111").is_ok());
}
