//! Prelude module for the calendrium crate.
//!
//! Re-exports the derive_more macros used by the value types.

pub use derive_more::{Display, From, Into};
