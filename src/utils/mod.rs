//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error, warning and result types
//! - Source locations for diagnostics

pub mod error;
pub mod location;

// Re-export commonly used items
pub use error::{StripError, StripOutput, StripResult, StripWarning};
pub use location::Location;
