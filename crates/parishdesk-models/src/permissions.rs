//! Permission records and the module-grouped catalog.

use crate::ids::EntityId;
use parishdesk_core::permissions::is_menu_visibility_action;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Permissions bucketed by their `module` label.
pub type GroupedPermissions = BTreeMap<String, Vec<Permission>>;

fn default_active() -> bool {
    true
}

/// An atomic grant recognized by the backend.
///
/// Only `permission_code` takes part in access decisions. `module` and
/// `action` decide which menu entries a code unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Permission {
    #[schema(value_type = String)]
    pub permission_id: EntityId,
    #[serde(default)]
    pub permission_name: String,
    pub permission_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub module: String,
    pub action: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Permission {
    pub fn new(
        permission_id: impl Into<EntityId>,
        permission_code: impl Into<String>,
        module: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        let permission_code = permission_code.into();
        Self {
            permission_id: permission_id.into(),
            permission_name: permission_code.clone(),
            permission_code,
            description: None,
            module: module.into(),
            action: action.into(),
            is_active: true,
            created_at: None,
        }
    }

    /// Whether this permission's action unlocks menu entries for its module.
    pub fn counts_towards_menu(&self) -> bool {
        is_menu_visibility_action(&self.action)
    }
}

/// Buckets permissions by module, keeping catalog order inside each bucket.
pub fn group_by_module(permissions: &[Permission]) -> GroupedPermissions {
    let mut grouped = GroupedPermissions::new();
    for permission in permissions {
        grouped
            .entry(permission.module.clone())
            .or_default()
            .push(permission.clone());
    }
    grouped
}

/// The full permission catalog as served by `GET /roles/permissions/all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PermissionsResponse {
    pub all: Vec<Permission>,
    #[serde(default)]
    pub grouped: BTreeMap<String, Vec<Permission>>,
}

impl PermissionsResponse {
    pub fn from_permissions(all: Vec<Permission>) -> Self {
        let grouped = group_by_module(&all);
        Self { all, grouped }
    }

    /// Rebuilds `grouped` from `all` when the backend left it out.
    pub fn normalized(self) -> Self {
        if self.grouped.is_empty() && !self.all.is_empty() {
            Self::from_permissions(self.all)
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.grouped.is_empty()
    }
}
