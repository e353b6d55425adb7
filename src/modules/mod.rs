//! Feature modules, one per API area.
//!
//! Each module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers with OpenAPI annotations
//! - `service.rs`: Logic the handlers delegate to
//! - `model.rs`: Request and response types
//! - `router.rs`: Axum router for the area
//!
//! | Module | Mounted at |
//! |--------|------------|
//! | [`auth`] | `/api/auth` |
//! | [`navigation`] | `/api/navigation` |
//! | [`roles`] | `/api/roles` |

pub mod auth;
pub mod navigation;
pub mod roles;
