use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the derived menu table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuPermissionEntry {
    pub menu_key: String,
    /// Backend modules the key is mapped to; empty for public entries.
    pub modules: Vec<String>,
    pub public: bool,
    /// Any one of these codes grants visibility. Empty and not public means
    /// nobody sees the entry.
    pub required_permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MenuPermissionsResponse {
    /// False when the table was derived from an empty catalog.
    pub catalog_loaded: bool,
    /// In mapping declaration order.
    pub entries: Vec<MenuPermissionEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    #[default]
    Any,
    All,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PermissionCheckRequest {
    pub codes: Vec<String>,
    #[serde(default)]
    pub mode: CheckMode,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PermissionCheckResponse {
    pub allowed: bool,
    pub mode: CheckMode,
}
