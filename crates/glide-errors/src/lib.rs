//! Centralized error types for glide
//!
//! Every crate in the workspace reports failures through the types defined here,
//! so a host binding one acceleration strategy per device sees a single error
//! taxonomy regardless of which strategy it picked.
//!
//! - [`common`]: the top-level [`AccelError`] plus classification helpers
//! - [`validation`]: caller contract breaches (speed preference, DPI, ...)
//! - [`profile`]: control-point table errors
//!
//! # Example
//!
//! ```
//! use glide_errors::prelude::*;
//!
//! fn check_speed(value: f64) -> Result<f64> {
//!     if !(-1.0..=1.0).contains(&value) {
//!         return Err(ValidationError::out_of_range("speed", value, -1.0, 1.0).into());
//!     }
//!     Ok(value)
//! }
//!
//! assert!(check_speed(1.5).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod prelude;
pub mod profile;
pub mod validation;

pub use common::{AccelError, ErrorCategory, ErrorSeverity};
pub use profile::ProfileError;
pub use validation::ValidationError;

/// A specialized `Result` type for glide operations.
pub type Result<T> = std::result::Result<T, AccelError>;
