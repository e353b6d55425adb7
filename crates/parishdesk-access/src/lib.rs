//! # parishdesk access
//!
//! Decides which sidebar sections a signed-in user may see.
//!
//! ```text
//! permission catalog ──► MenuModuleMapping::derive ──► MenuPermissions
//!                                                          │
//! user profile ──► GrantSet ─────────► AccessEvaluator ◄──┘
//!                                          │
//!                                          ▼
//!                                filtered Vec<MenuItem>
//! ```
//!
//! - [`mapping`]: The compiled-in menu key to backend module table
//! - [`derive`]: Turns the grouped catalog into required permission codes per menu key
//! - [`evaluator`]: Any-match / all-match checks and the per-session [`AccessEvaluator`]
//! - [`validation`]: Reports mapping entries and menu items that do not line up
//!
//! Nothing here returns an error. Missing data degrades to hidden, never to
//! visible, except for entries the mapping declares public.

pub mod derive;
pub mod evaluator;
pub mod mapping;
pub mod validation;

pub use derive::{MenuPermissions, RequiredPermissions, derive_menu_permissions};
pub use evaluator::{
    AccessEvaluator, GrantSet, Visibility, has_all_permissions, has_any_permission,
    has_permission, is_visible,
};
pub use mapping::{MenuModuleMapping, MenuModules};
pub use validation::{MappingIssue, validate_mapping, validate_menu_items};
