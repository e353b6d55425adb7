//! # parishdesk models
//!
//! Data shapes exchanged with the parish backend and the dashboard front end.
//!
//! # Modules
//!
//! - [`api`]: The `{ success, data, message }` envelope every backend reply uses
//! - [`ids`]: Identifiers the backend sends as either numbers or strings
//! - [`navigation`]: Sidebar menu items
//! - [`permissions`]: Permission records and the grouped catalog
//! - [`profile`]: The authenticated user's profile, roles and grants
//!
//! # Example
//!
//! ```ignore
//! use parishdesk_models::{ApiResponse, PermissionsResponse};
//!
//! let envelope: ApiResponse<PermissionsResponse> = serde_json::from_str(body)?;
//! let catalog = envelope.into_data()?.normalized();
//! ```

pub mod api;
pub mod ids;
pub mod navigation;
pub mod permissions;
pub mod profile;

pub use api::{ApiResponse, EnvelopeError};
pub use ids::EntityId;
pub use navigation::MenuItem;
pub use permissions::{GroupedPermissions, Permission, PermissionsResponse, group_by_module};
pub use profile::{ProfileResponse, ProfileUser, Role};
