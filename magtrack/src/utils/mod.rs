//! Small text helpers shared by the track parser and the field types.

pub mod text;

pub use text::*;
