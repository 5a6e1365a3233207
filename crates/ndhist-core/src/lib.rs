//! Core traits and types for multidimensional histograms
//!
//! This crate holds what every other ndhist crate agrees on: the error type,
//! the [`Weight`] trait bounding bin content, and the float tolerance helpers
//! used to decide whether two binnings line up.

pub mod error;
pub mod math;
pub mod numeric;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Weight;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
