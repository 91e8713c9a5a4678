//! Data layer - Static mappings and constants
//!
//! This module contains the static data used while stripping:
//! - Placeholder strings and the default math allow-list
//! - Control symbol mappings

pub mod constants;
pub mod symbols;

// Re-export commonly used items
pub use constants::{
    AUTHOR_PLACEHOLDER, GREEK_LETTERS, IGNORED_ENVIRONMENTS, MATHS_PLACEHOLDER, MATH_SYMBOLS,
    NUMBER_PLACEHOLDER, REFTYPE_NUMBER_PLACEHOLDER,
};
pub use symbols::{control_symbol_text, CONTROL_SYMBOLS};
