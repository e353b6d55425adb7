use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A sidebar navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    /// Lookup key into the menu-module mapping. Falls back to `href`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl MenuItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            label: label.into(),
            href: href.into(),
            icon: None,
        }
    }

    pub fn without_key(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            key: None,
            label: label.into(),
            href: href.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The key used for permission lookups: the explicit key if non-empty,
    /// otherwise `href` minus its first character.
    pub fn menu_key(&self) -> &str {
        match self.key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                let mut chars = self.href.chars();
                chars.next();
                chars.as_str()
            }
        }
    }
}
