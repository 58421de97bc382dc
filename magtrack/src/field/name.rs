// magtrack-rs/magtrack/src/field/name.rs

use crate::constants::NAME_SEPARATOR;
use crate::field::TrackField;
use crate::utils::{is_blank, trim_to_empty};
use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;

/// Cardholder name as encoded on track 1: `SURNAME/GIVEN NAMES`.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display(fmt = "{}", raw)]
pub struct Name {
    raw: String,
}

impl Name {
    /// Surname, the part before the first `/`. A name without a separator
    /// is treated as a surname only.
    pub fn last_name(&self) -> &str {
        let raw = trim_to_empty(&self.raw);
        match raw.split_once(NAME_SEPARATOR) {
            Some((last, _)) => trim_to_empty(last),
            None => raw,
        }
    }

    /// Given names, the part after the first `/`.
    pub fn first_name(&self) -> &str {
        match self.raw.split_once(NAME_SEPARATOR) {
            Some((_, first)) => trim_to_empty(first),
            None => "",
        }
    }

    /// Name in reading order, e.g. `JOHN DOE` for `DOE/JOHN`.
    pub fn full_name(&self) -> String {
        match (self.first_name(), self.last_name()) {
            ("", last) => last.to_string(),
            (first, "") => first.to_string(),
            (first, last) => format!("{} {}", first, last),
        }
    }
}

impl TrackField for Name {
    fn from_raw(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn is_present(&self) -> bool {
        !is_blank(&self.raw)
    }
}

impl TryFrom<&str> for Name {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        if is_blank(raw) {
            return Err(Error::Empty("name"));
        }
        Ok(Self::from_raw(raw))
    }
}
