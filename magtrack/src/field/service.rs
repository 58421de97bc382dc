// magtrack-rs/magtrack/src/field/service.rs

use crate::constants::SERVICE_CODE_LEN;
use crate::field::TrackField;
use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;

/// First service code digit: interchange and technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Interchange {
    International,
    InternationalIntegratedCircuit,
    National,
    NationalIntegratedCircuit,
    Private,
    Test,
    Unknown(u8),
}

impl Interchange {
    pub fn from_digit(d: u8) -> Self {
        match d {
            1 => Self::International,
            2 => Self::InternationalIntegratedCircuit,
            5 => Self::National,
            6 => Self::NationalIntegratedCircuit,
            7 => Self::Private,
            9 => Self::Test,
            other => Self::Unknown(other),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::International => "International interchange OK",
            Self::InternationalIntegratedCircuit => {
                "International interchange, use IC (chip) where feasible"
            }
            Self::National => "National interchange only except under bilateral agreement",
            Self::NationalIntegratedCircuit => {
                "National interchange only except under bilateral agreement, use IC (chip) where feasible"
            }
            Self::Private => "No interchange except under bilateral agreement (closed loop)",
            Self::Test => "Test",
            Self::Unknown(_) => "Unknown",
        }
    }
}

/// Second service code digit: authorization processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AuthorizationProcessing {
    Normal,
    ByIssuer,
    ByIssuerUnlessBilateralAgreement,
    Unknown(u8),
}

impl AuthorizationProcessing {
    pub fn from_digit(d: u8) -> Self {
        match d {
            0 => Self::Normal,
            2 => Self::ByIssuer,
            4 => Self::ByIssuerUnlessBilateralAgreement,
            other => Self::Unknown(other),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::ByIssuer => "Contact issuer via online means",
            Self::ByIssuerUnlessBilateralAgreement => {
                "Contact issuer via online means except under bilateral agreement"
            }
            Self::Unknown(_) => "Unknown",
        }
    }
}

/// Third service code digit: allowed services and PIN requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AllowedServices {
    NoRestrictionsPinRequired,
    NoRestrictions,
    GoodsAndServicesOnly,
    AtmOnlyPinRequired,
    CashOnly,
    GoodsAndServicesOnlyPinRequired,
    NoRestrictionsPinWhereFeasible,
    GoodsAndServicesOnlyPinWhereFeasible,
    Unknown(u8),
}

impl AllowedServices {
    pub fn from_digit(d: u8) -> Self {
        match d {
            0 => Self::NoRestrictionsPinRequired,
            1 => Self::NoRestrictions,
            2 => Self::GoodsAndServicesOnly,
            3 => Self::AtmOnlyPinRequired,
            4 => Self::CashOnly,
            5 => Self::GoodsAndServicesOnlyPinRequired,
            6 => Self::NoRestrictionsPinWhereFeasible,
            7 => Self::GoodsAndServicesOnlyPinWhereFeasible,
            other => Self::Unknown(other),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NoRestrictionsPinRequired => "No restrictions, PIN required",
            Self::NoRestrictions => "No restrictions",
            Self::GoodsAndServicesOnly => "Goods and services only (no cash)",
            Self::AtmOnlyPinRequired => "ATM only, PIN required",
            Self::CashOnly => "Cash only",
            Self::GoodsAndServicesOnlyPinRequired => {
                "Goods and services only (no cash), PIN required"
            }
            Self::NoRestrictionsPinWhereFeasible => "No restrictions, use PIN where feasible",
            Self::GoodsAndServicesOnlyPinWhereFeasible => {
                "Goods and services only (no cash), use PIN where feasible"
            }
            Self::Unknown(_) => "Unknown",
        }
    }
}

/// Three-digit service code. Absent when the track carries the `^`
/// placeholder or omits the sub-field.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display(fmt = "{}", raw)]
pub struct ServiceCode {
    raw: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    digits: Option<[u8; 3]>,
}

fn decode_digits(raw: &str) -> Result<[u8; 3]> {
    if raw.is_empty() {
        return Err(Error::Empty("service code"));
    }
    if let Some(found) = raw.chars().find(|c| !c.is_ascii_digit()) {
        return Err(Error::InvalidCharacter {
            field: "service code",
            found,
        });
    }
    if raw.len() != SERVICE_CODE_LEN {
        return Err(Error::InvalidLength {
            field: "service code",
            expected: SERVICE_CODE_LEN,
            actual: raw.len(),
        });
    }
    let b = raw.as_bytes();
    Ok([b[0] - b'0', b[1] - b'0', b[2] - b'0'])
}

impl ServiceCode {
    /// Meaning of the first digit.
    pub fn interchange(&self) -> Option<Interchange> {
        self.digits.map(|d| Interchange::from_digit(d[0]))
    }

    /// Meaning of the second digit.
    pub fn authorization_processing(&self) -> Option<AuthorizationProcessing> {
        self.digits.map(|d| AuthorizationProcessing::from_digit(d[1]))
    }

    /// Meaning of the third digit.
    pub fn allowed_services(&self) -> Option<AllowedServices> {
        self.digits.map(|d| AllowedServices::from_digit(d[2]))
    }
}

impl TrackField for ServiceCode {
    fn from_raw(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            digits: decode_digits(raw).ok(),
        }
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn is_present(&self) -> bool {
        self.digits.is_some()
    }
}

impl TryFrom<&str> for ServiceCode {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        let digits = decode_digits(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            digits: Some(digits),
        })
    }
}
