//! Configuration for the parishdesk server.
//!
//! Environment-driven settings live in the `parishdesk-config` crate and are
//! re-exported here. The sidebar definition is compiled in.
//!
//! # Modules
//!
//! - [`navigation`]: The dashboard's default sidebar entries
//!
//! # Environment Variables
//!
//! - `PARISH_API_BASE_URL`, `PARISH_API_TIMEOUT_SECS`: see [`BackendConfig`]
//! - `ALLOWED_ORIGINS`: see [`CorsConfig`]
//! - `SERVER_HOST`, `SERVER_PORT`: see [`ServerConfig`]
//!
//! # Example
//!
//! ```ignore
//! use crate::config::{BackendConfig, navigation::default_navigation_items};
//!
//! let backend = BackendConfig::from_env();
//! let items = default_navigation_items();
//! ```

pub mod navigation;

pub use parishdesk_config::{BackendConfig, CorsConfig, ServerConfig};
