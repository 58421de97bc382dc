// magtrack-rs/magtrack/src/track/mod.rs

//! Track records and the parser for track 1 format B.

pub mod format_b;
pub mod grammar;

pub use format_b::TrackOne;

use crate::utils::is_blank;

/// Behaviour shared by parsed magnetic track records.
pub trait TrackData {
    /// Maximum record length permitted for this track, in characters.
    const MAX_LENGTH: usize;

    /// The matched record, sentinels included. Empty when nothing matched.
    fn raw_track_data(&self) -> &str;

    /// Issuer discretionary data. Empty when absent.
    fn discretionary_data(&self) -> &str;

    /// Whether a record was matched.
    fn has_raw_track_data(&self) -> bool {
        !is_blank(self.raw_track_data())
    }

    /// Whether the record carries non-blank discretionary data.
    fn has_discretionary_data(&self) -> bool {
        !is_blank(self.discretionary_data())
    }

    /// True when a record was matched but is longer than the track allows.
    /// Such a record is still parsed; this only flags the violation.
    fn exceeds_maximum_length(&self) -> bool {
        self.has_raw_track_data() && self.raw_track_data().chars().count() > Self::MAX_LENGTH
    }
}
