use parishdesk_access::{MappingIssue, Visibility};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::session::Notification;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavigationQuery {
    /// Also return hidden entries, each tagged with why it is hidden.
    #[serde(default)]
    pub include_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavigationEntry {
    pub key: String,
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub visibility: Visibility,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavigationResponse {
    /// In declaration order.
    pub items: Vec<NavigationEntry>,
    pub catalog_loaded: bool,
    pub profile_loaded: bool,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub catalog_loaded: bool,
    /// Mapped modules missing from the catalog.
    pub mapping_issues: Vec<MappingIssue>,
    /// Sidebar entries without a mapping, or sharing a key.
    pub menu_issues: Vec<MappingIssue>,
    /// Mapped keys that nobody can currently see.
    pub unresolved_keys: Vec<String>,
    pub notifications: Vec<Notification>,
}
