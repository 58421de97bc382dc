// magtrack-rs/magtrack/src/field/expiration.rs

use crate::constants::EXPIRATION_DATE_LEN;
use crate::field::TrackField;
use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;

/// Card expiration date, encoded on the stripe as `YYMM`.
///
/// The track placeholder `^` (or anything that is not four digits with a
/// valid month) leaves the date absent.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display(fmt = "{}", raw)]
pub struct ExpirationDate {
    raw: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    parsed: Option<(u16, u8)>,
}

/// Decode `YYMM` into (year, month).
fn decode_yymm(raw: &str) -> Result<(u16, u8)> {
    if raw.is_empty() {
        return Err(Error::Empty("expiration date"));
    }
    if let Some(found) = raw.chars().find(|c| !c.is_ascii_digit()) {
        return Err(Error::InvalidCharacter {
            field: "expiration date",
            found,
        });
    }
    if raw.len() != EXPIRATION_DATE_LEN {
        return Err(Error::InvalidLength {
            field: "expiration date",
            expected: EXPIRATION_DATE_LEN,
            actual: raw.len(),
        });
    }
    let b = raw.as_bytes();
    let yy = u16::from(b[0] - b'0') * 10 + u16::from(b[1] - b'0');
    let month = (b[2] - b'0') * 10 + (b[3] - b'0');
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth(month));
    }
    Ok((2000 + yy, month))
}

impl ExpirationDate {
    /// Four-digit year, `2000 + YY`.
    pub fn year(&self) -> Option<u16> {
        self.parsed.map(|(y, _)| y)
    }

    /// Month, 1 to 12.
    pub fn month(&self) -> Option<u8> {
        self.parsed.map(|(_, m)| m)
    }

    /// Whether the card has expired as of the given year and month.
    /// A card is valid through the end of its expiration month. An absent
    /// date never counts as expired.
    pub fn is_expired_at(&self, year: u16, month: u8) -> bool {
        match self.parsed {
            Some(expiry) => (year, month) > expiry,
            None => false,
        }
    }
}

impl TrackField for ExpirationDate {
    fn from_raw(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            parsed: decode_yymm(raw).ok(),
        }
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn is_present(&self) -> bool {
        self.parsed.is_some()
    }
}

impl TryFrom<&str> for ExpirationDate {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        let parsed = decode_yymm(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            parsed: Some(parsed),
        })
    }
}
