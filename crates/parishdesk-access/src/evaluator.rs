//! Access evaluation.
//!
//! The free functions work on raw code lists and answer the classic
//! questions (any / all / one). [`AccessEvaluator`] combines them with the
//! session's load state to decide sidebar visibility, failing closed while
//! either the catalog or the profile is missing.

use crate::derive::{MenuPermissions, RequiredPermissions};
use crate::mapping::MenuModuleMapping;
use parishdesk_models::{MenuItem, Permission};
use serde::Serialize;
use std::collections::HashSet;
use utoipa::ToSchema;

/// Permission codes held by one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSet {
    codes: HashSet<String>,
}

impl GrantSet {
    /// Extracts `permission_code` from each record; nothing else is read.
    pub fn from_permissions(permissions: &[Permission]) -> Self {
        permissions
            .iter()
            .map(|permission| permission.permission_code.clone())
            .collect()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FromIterator<String> for GrantSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for GrantSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

/// Menu visibility check: no required codes means public, otherwise any
/// single match is enough. A missing grant set counts as empty.
pub fn is_visible<S: AsRef<str>>(required: &[S], granted: Option<&GrantSet>) -> bool {
    has_any_permission(required, granted)
}

/// True if `required` is empty or `granted` holds at least one of its codes.
pub fn has_any_permission<S: AsRef<str>>(required: &[S], granted: Option<&GrantSet>) -> bool {
    if required.is_empty() {
        return true;
    }
    let Some(granted) = granted else {
        return false;
    };
    required.iter().any(|code| granted.contains(code.as_ref()))
}

/// True if `required` is empty or `granted` holds every one of its codes.
pub fn has_all_permissions<S: AsRef<str>>(required: &[S], granted: Option<&GrantSet>) -> bool {
    if required.is_empty() {
        return true;
    }
    let Some(granted) = granted else {
        return false;
    };
    required.iter().all(|code| granted.contains(code.as_ref()))
}

pub fn has_permission(code: &str, granted: Option<&GrantSet>) -> bool {
    granted.is_some_and(|granted| granted.contains(code))
}

/// Why a menu entry is or is not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Mapped to no module.
    Public,
    /// The user holds at least one qualifying code.
    Granted,
    /// The user holds none of the qualifying codes.
    Denied,
    /// The permission catalog has not been loaded for this session.
    CatalogPending,
    /// The catalog is loaded but the user's profile is not.
    ProfilePending,
    /// Mapped to modules that produced no qualifying codes.
    Unresolved,
    /// No mapping entry for this key.
    Unmapped,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Granted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Granted => "granted",
            Visibility::Denied => "denied",
            Visibility::CatalogPending => "catalog_pending",
            Visibility::ProfilePending => "profile_pending",
            Visibility::Unresolved => "unresolved",
            Visibility::Unmapped => "unmapped",
        }
    }
}

/// Evaluates menu visibility for one session.
///
/// `menu_permissions` is `None` until the catalog loads and `grants` is
/// `None` until the profile loads. Either being `None` limits the result to
/// public entries.
#[derive(Debug, Clone, Copy)]
pub struct AccessEvaluator<'a> {
    mapping: &'a MenuModuleMapping,
    menu_permissions: Option<&'a MenuPermissions>,
    grants: Option<&'a GrantSet>,
}

impl<'a> AccessEvaluator<'a> {
    pub fn new(mapping: &'a MenuModuleMapping) -> Self {
        Self {
            mapping,
            menu_permissions: None,
            grants: None,
        }
    }

    pub fn with_menu_permissions(mut self, menu_permissions: Option<&'a MenuPermissions>) -> Self {
        self.menu_permissions = menu_permissions;
        self
    }

    pub fn with_grants(mut self, grants: Option<&'a GrantSet>) -> Self {
        self.grants = grants;
        self
    }

    pub fn visibility(&self, menu_key: &str) -> Visibility {
        let Some(modules) = self.mapping.get(menu_key) else {
            return Visibility::Unmapped;
        };
        if modules.is_public() {
            return Visibility::Public;
        }

        let Some(table) = self.menu_permissions else {
            return Visibility::CatalogPending;
        };

        let codes = match table.get(menu_key) {
            Some(RequiredPermissions::Public) => return Visibility::Public,
            Some(RequiredPermissions::Codes(codes)) if !codes.is_empty() => codes,
            _ => return Visibility::Unresolved,
        };

        match self.grants {
            None => Visibility::ProfilePending,
            Some(grants) if has_any_permission(codes.as_slice(), Some(grants)) => {
                Visibility::Granted
            }
            Some(_) => Visibility::Denied,
        }
    }

    pub fn is_menu_visible(&self, menu_key: &str) -> bool {
        self.visibility(menu_key).is_visible()
    }

    /// Every item paired with its visibility, in declaration order.
    pub fn evaluate<'i>(&self, items: &'i [MenuItem]) -> Vec<(&'i MenuItem, Visibility)> {
        items
            .iter()
            .map(|item| (item, self.visibility(item.menu_key())))
            .collect()
    }

    /// Visible items only, in declaration order.
    pub fn filter<'i>(&self, items: &'i [MenuItem]) -> Vec<&'i MenuItem> {
        items
            .iter()
            .filter(|item| self.is_menu_visible(item.menu_key()))
            .collect()
    }
}
