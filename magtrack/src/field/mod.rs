// magtrack-rs/magtrack/src/field/mod.rs

//! Value objects for the individual Track 1 fields.
//!
//! The track parser only slices substrings; each field type decides for
//! itself whether the slice it was given holds a usable value.

pub mod account;
pub mod expiration;
pub mod name;
pub mod service;

pub use account::PrimaryAccountNumber;
pub use expiration::ExpirationDate;
pub use name::Name;
pub use service::{AllowedServices, AuthorizationProcessing, Interchange, ServiceCode};

/// Capability the track parser relies on to build a field from a slice of
/// the raw record.
pub trait TrackField: Sized {
    /// Build the field from a raw substring, possibly empty. Never fails;
    /// an unusable value is reported through [`TrackField::is_present`].
    fn from_raw(raw: &str) -> Self;

    /// The substring this field was built from.
    fn raw(&self) -> &str;

    /// Whether the field holds a usable value.
    fn is_present(&self) -> bool;
}
