//! Wire types for the family-service backend
//!
//! These shapes mirror the managed backend's JSON exactly; camelCase field
//! names are renamed at the serde boundary so the rest of the crate stays
//! snake_case.

use serde::{Deserialize, Serialize};

/// A person as returned by the users endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersonRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl PersonRecord {
    /// Display name with email fallback; empty when the profile has neither
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.email.as_deref().unwrap_or_default(),
        }
    }
}

/// Source endpoint wrapper inside a relationship record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RelationParty {
    pub id: String,
}

/// A relationship as returned by the relationships endpoint
///
/// `user.id` is the source person and `withUser` the target person id;
/// `relation` is the free-form type code resolved through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RelationshipRecord {
    pub id: String,
    pub user: RelationParty,
    #[serde(rename = "withUser")]
    pub with_user: String,
    pub relation: String,
}
