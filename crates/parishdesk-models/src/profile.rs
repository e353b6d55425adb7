//! The authenticated user's profile as served by `GET /auth/profile`.
//!
//! Only `permissions` feeds access decisions; the rest is passed through to
//! the dashboard unchanged.

use crate::ids::EntityId;
use crate::permissions::Permission;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileUser {
    #[schema(value_type = String)]
    pub user_id: EntityId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// `SUPER_ADMIN`, `CHURCH_ADMIN` or `PARISHIONER`.
    #[serde(default)]
    pub user_type: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub email_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    #[schema(value_type = String)]
    pub role_id: EntityId,
    pub role_name: String,
    #[serde(default)]
    pub role_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_system_role: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub user: ProfileUser,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub parish: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub parishioner: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub church_admin: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub ward: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub family: Option<Value>,
}

impl ProfileResponse {
    /// A bare profile carrying only the given permissions.
    pub fn with_permissions(email: impl Into<String>, permissions: Vec<Permission>) -> Self {
        Self {
            user: ProfileUser {
                user_id: EntityId::Number(1),
                email: email.into(),
                first_name: String::new(),
                last_name: String::new(),
                phone: None,
                profile_image_url: None,
                user_type: "PARISHIONER".to_string(),
                is_active: true,
                email_verified: false,
            },
            roles: Vec::new(),
            permissions,
            parish: None,
            parishioner: None,
            church_admin: None,
            ward: None,
            family: None,
        }
    }

    pub fn permission_codes(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(|p| p.permission_code.as_str())
    }
}
