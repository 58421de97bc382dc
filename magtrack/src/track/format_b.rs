// magtrack-rs/magtrack/src/track/format_b.rs

use crate::constants::TRACK1_MAX_LENGTH;
use crate::field::{ExpirationDate, Name, PrimaryAccountNumber, ServiceCode, TrackField};
use crate::track::TrackData;
use crate::track::grammar::{self, track_one_format_b};
use crate::utils::{is_blank, trim_optional, trim_to_empty};
use crate::{Error, Result};
use log::{debug, trace};
use regex::Captures;
use std::fmt;
use std::str::FromStr;

/// Track 1 data in ISO/IEC 7813 format B.
///
/// Built from a raw reader string that may carry surrounding whitespace and
/// other tracks. When the input does not contain a format B record every
/// field is empty; see [`TrackOne::try_parse`] for an erroring variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrackOne {
    raw_track_data: String,
    discretionary_data: String,
    format_code: String,
    primary_account_number: PrimaryAccountNumber,
    name: Name,
    expiration_date: ExpirationDate,
    service_code: ServiceCode,
}

/// Text of a capture group, or `""` when the group did not participate.
fn group<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn field<F: TrackField>(caps: &Captures<'_>, index: usize) -> F {
    F::from_raw(group(caps, index))
}

impl TrackOne {
    /// Parse track 1 format B data out of a raw swipe.
    ///
    /// Never fails: input without a recognisable record yields
    /// `TrackOne::default()`.
    pub fn parse<S: AsRef<str>>(raw: S) -> Self {
        Self::parse_trimmed(trim_to_empty(raw.as_ref()))
    }

    /// Like [`TrackOne::parse`], treating `None` as empty input.
    pub fn from_optional(raw: Option<&str>) -> Self {
        Self::parse_trimmed(trim_optional(raw))
    }

    /// Parse, reporting input without a format B record as
    /// [`Error::NoMatch`].
    pub fn try_parse<S: AsRef<str>>(raw: S) -> Result<Self> {
        let track = Self::parse(raw);
        if track.raw_track_data.is_empty() {
            return Err(Error::NoMatch);
        }
        Ok(track)
    }

    fn parse_trimmed(input: &str) -> Self {
        match track_one_format_b().captures(input) {
            Some(caps) => Self::from_captures(&caps),
            None => {
                debug!("no track 1 format B record in {} chars of input", input.len());
                Self::default()
            }
        }
    }

    fn from_captures(caps: &Captures<'_>) -> Self {
        // Lengths only; the groups hold cardholder data.
        trace!(
            "track 1 groups: raw={} pan={} name={} exp={} svc={} dd={}",
            group(caps, grammar::RAW_TRACK_DATA).len(),
            group(caps, grammar::PRIMARY_ACCOUNT_NUMBER).len(),
            group(caps, grammar::NAME).len(),
            group(caps, grammar::EXPIRATION_DATE).len(),
            group(caps, grammar::SERVICE_CODE).len(),
            group(caps, grammar::DISCRETIONARY_DATA).len(),
        );

        let track = Self {
            raw_track_data: group(caps, grammar::RAW_TRACK_DATA).to_string(),
            discretionary_data: group(caps, grammar::DISCRETIONARY_DATA).to_string(),
            format_code: group(caps, grammar::FORMAT_CODE).to_string(),
            primary_account_number: field(caps, grammar::PRIMARY_ACCOUNT_NUMBER),
            name: field(caps, grammar::NAME),
            expiration_date: field(caps, grammar::EXPIRATION_DATE),
            service_code: field(caps, grammar::SERVICE_CODE),
        };
        if track.exceeds_maximum_length() {
            debug!(
                "track 1 record is {} chars, over the {} char limit",
                track.raw_track_data.chars().count(),
                TRACK1_MAX_LENGTH
            );
        }
        track
    }

    /// Format code, usually `"B"`.
    pub fn format_code(&self) -> &str {
        &self.format_code
    }

    /// Primary account number; check [`TrackOne::has_primary_account_number`]
    /// before relying on its digits.
    pub fn primary_account_number(&self) -> &PrimaryAccountNumber {
        &self.primary_account_number
    }

    /// Cardholder name as encoded on the stripe.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Expiration date, absent when the track carries the `^` placeholder.
    pub fn expiration_date(&self) -> &ExpirationDate {
        &self.expiration_date
    }

    /// Service code, absent when `^` or omitted.
    pub fn service_code(&self) -> &ServiceCode {
        &self.service_code
    }

    /// Whether a format code was matched.
    pub fn has_format_code(&self) -> bool {
        !is_blank(&self.format_code)
    }

    /// Whether the account number holds 1 to 19 digits.
    pub fn has_primary_account_number(&self) -> bool {
        self.primary_account_number.is_present()
    }

    /// Whether the name is non-blank.
    pub fn has_name(&self) -> bool {
        self.name.is_present()
    }

    /// Whether the expiration date decodes to a valid year and month.
    pub fn has_expiration_date(&self) -> bool {
        self.expiration_date.is_present()
    }

    /// Whether the service code holds three digits.
    pub fn has_service_code(&self) -> bool {
        self.service_code.is_present()
    }
}

impl TrackData for TrackOne {
    const MAX_LENGTH: usize = TRACK1_MAX_LENGTH;

    fn raw_track_data(&self) -> &str {
        &self.raw_track_data
    }

    fn discretionary_data(&self) -> &str {
        &self.discretionary_data
    }
}

impl FromStr for TrackOne {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl fmt::Display for TrackOne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_track_data)
    }
}
