//! Permission vocabulary shared with the parish backend.
//!
//! The backend groups permissions by a `module` label and tags each one with
//! an `action`. Both are plain strings on the wire, so the names here must
//! match the backend byte for byte.
//!
//! # Example
//!
//! ```ignore
//! use parishdesk_core::permissions;
//!
//! if permissions::is_menu_visibility_action(&permission.action) {
//!     // counts towards menu visibility
//! }
//! ```

// =============================================================================
// Actions
// =============================================================================

/// Read access to a module's records
pub const ACTION_READ: &str = "read";
/// Full management of a module's records
pub const ACTION_MANAGE: &str = "manage";
/// View-only access (dashboards, reports)
pub const ACTION_VIEW: &str = "view";
/// Create records
pub const ACTION_CREATE: &str = "create";
/// Update records
pub const ACTION_UPDATE: &str = "update";
/// Delete records
pub const ACTION_DELETE: &str = "delete";

/// Actions that make a permission count towards menu visibility.
pub const MENU_VISIBILITY_ACTIONS: [&str; 3] = [ACTION_READ, ACTION_MANAGE, ACTION_VIEW];

/// Returns true if `action` is one of [`MENU_VISIBILITY_ACTIONS`].
///
/// Matching is exact and case-sensitive.
pub fn is_menu_visibility_action(action: &str) -> bool {
    MENU_VISIBILITY_ACTIONS.contains(&action)
}

// =============================================================================
// Backend modules
// =============================================================================

pub const MODULE_ACCOUNTING: &str = "Accounting";
pub const MODULE_ANNOUNCEMENTS: &str = "Announcements";
pub const MODULE_EVENTS: &str = "Events";
pub const MODULE_FAMILIES: &str = "Families";
pub const MODULE_PARISHES: &str = "Parishes";
pub const MODULE_PRAYERS: &str = "Prayers";
pub const MODULE_ROLES: &str = "Roles";
pub const MODULE_USERS: &str = "Users";
pub const MODULE_WARDS: &str = "Wards";
