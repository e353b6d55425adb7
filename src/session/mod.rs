//! Per-session navigation state.
//!
//! Each bearer token owns a [`SessionContext`] holding the last published
//! permission catalog and profile. Loads run outside the lock and publish
//! whole snapshots; [`SessionContext::clear`] invalidates anything still in
//! flight.

pub mod context;
pub mod loader;
pub mod store;

pub use context::{CatalogSnapshot, ProfileSnapshot, SessionContext, SessionSnapshot};
pub use loader::{
    LoadOutcome, LoadReport, Notification, NotificationSource, PERMISSIONS_FAILURE_MESSAGE,
    PROFILE_FAILURE_MESSAGE, ensure_loaded, load_catalog, load_profile,
};
pub use store::{SessionStore, session_key};
