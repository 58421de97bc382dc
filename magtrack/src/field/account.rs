// magtrack-rs/magtrack/src/field/account.rs

use crate::constants::PAN_MAX_DIGITS;
use crate::field::TrackField;
use crate::utils::{is_ascii_digits, trim_to_empty};
use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;

/// Primary account number, 1 to 19 digits.
///
/// Only the shape is checked. Check digits and issuer ranges are left to
/// the caller.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display(fmt = "{}", raw)]
pub struct PrimaryAccountNumber {
    raw: String,
}

impl PrimaryAccountNumber {
    /// The account number digits, or `None` when not present.
    pub fn number(&self) -> Option<&str> {
        if self.is_present() {
            Some(trim_to_empty(&self.raw))
        } else {
            None
        }
    }

    /// Last four digits, or the whole number when shorter.
    pub fn last_four_digits(&self) -> Option<&str> {
        self.number().map(|n| &n[n.len().saturating_sub(4)..])
    }

    /// Account number with every digit but the last four replaced by `*`.
    pub fn masked(&self) -> Option<String> {
        let number = self.number()?;
        let keep = number.len().saturating_sub(4);
        let mut out = "*".repeat(keep);
        out.push_str(&number[keep..]);
        Some(out)
    }
}

impl TrackField for PrimaryAccountNumber {
    fn from_raw(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn is_present(&self) -> bool {
        let digits = trim_to_empty(&self.raw);
        is_ascii_digits(digits) && digits.len() <= PAN_MAX_DIGITS
    }
}

impl TryFrom<&str> for PrimaryAccountNumber {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        let digits = trim_to_empty(raw);
        if digits.is_empty() {
            return Err(Error::Empty("primary account number"));
        }
        if let Some(found) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::InvalidCharacter {
                field: "primary account number",
                found,
            });
        }
        if digits.len() > PAN_MAX_DIGITS {
            return Err(Error::InvalidLength {
                field: "primary account number",
                expected: PAN_MAX_DIGITS,
                actual: digits.len(),
            });
        }
        Ok(Self::from_raw(raw))
    }
}
