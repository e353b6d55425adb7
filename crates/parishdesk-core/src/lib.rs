//! # parishdesk core
//!
//! Foundational types shared by every parishdesk crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: Permission action and backend module name constants
//!
//! # Example
//!
//! ```ignore
//! use parishdesk_core::errors::AppError;
//!
//! let error = AppError::bad_gateway(anyhow::anyhow!("Parish backend unavailable"));
//! ```

pub mod errors;
pub mod permissions;

pub use errors::AppError;
