//! # parishdesk config
//!
//! Configuration types loaded from environment variables:
//!
//! - [`backend`]: Parish backend API location and request timeout
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address for the parishdesk server
//!
//! # Example
//!
//! ```ignore
//! use parishdesk_config::{BackendConfig, CorsConfig, ServerConfig};
//!
//! let backend_config = BackendConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod backend;
pub mod cors;
pub mod server;

pub use backend::BackendConfig;
pub use cors::CorsConfig;
pub use server::ServerConfig;
