// magtrack-rs/magtrack/src/prelude.rs

pub use crate::field::{
    AllowedServices, AuthorizationProcessing, ExpirationDate, Interchange, Name,
    PrimaryAccountNumber, ServiceCode, TrackField,
};
pub use crate::track::{TrackData, TrackOne};
pub use crate::{Error, Result};
