//! Prelude module for convenient error handling imports.
//!
//! ```
//! use glide_errors::prelude::*;
//!
//! fn load(points: usize) -> Result<()> {
//!     if points < 2 {
//!         return Err(ProfileError::TooFewPoints { count: points, min: 2 }.into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(load(1).is_err());
//! ```

pub use crate::{
    Result,
    common::{AccelError, ErrorCategory, ErrorSeverity},
    profile::ProfileError,
    validation::ValidationError,
};
