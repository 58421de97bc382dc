// magtrack-rs/magtrack/src/lib.rs

//! magtrack
//!
//! Pure Rust parser for ISO/IEC 7813 track 1 format B magnetic-stripe data.
//! Raw reader output, including surrounding whitespace and appended tracks,
//! goes in; a [`TrackOne`] with typed cardholder fields comes out.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod field;
pub mod prelude;
pub mod track;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// the field types and `TrackOne` are available to consumers.
pub use crate::error::*;
pub use crate::field::*;
pub use crate::track::{TrackData, TrackOne};

pub use prelude::*;
