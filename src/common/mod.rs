//! Shared helpers used by both the catalog side and the OOXML writer.

pub mod error;
pub mod unit;
pub mod xml;

pub use error::{Error, Result};
