//! Relationship catalog for family graph rendering
//!
//! Maps free-form relationship-type codes ("parent", "spouse", ...) to the
//! display descriptor the renderer uses for edge labels, icons, and colors.
//! Unknown codes get a neutral fallback so new relationship types degrade
//! gracefully instead of breaking the view.

use serde::{Deserialize, Serialize};

/// Neutral color for unrecognized relationship codes
const FALLBACK_COLOR: &str = "#6B7280"; // Gray
/// Neutral icon for unrecognized relationship codes
const FALLBACK_ICON: &str = "link";

/// Display descriptor for a relationship-type code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    /// Canonical catalog code (the raw code for fallback descriptors)
    pub code: String,
    pub label: String,
    pub icon: String,
    pub color: String,
}

impl RelationDescriptor {
    fn known(code: &str, label: &str, icon: &str, color: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    /// Generic descriptor for a code the catalog does not recognize.
    /// The raw code doubles as the label so the renderer still shows
    /// something meaningful.
    pub fn generic(code: &str) -> Self {
        Self {
            code: code.to_string(),
            label: code.to_string(),
            icon: FALLBACK_ICON.to_string(),
            color: FALLBACK_COLOR.to_string(),
        }
    }

    /// True when this descriptor came from the fallback path
    pub fn is_generic(&self) -> bool {
        self.icon == FALLBACK_ICON && self.color == FALLBACK_COLOR && self.code == self.label
    }
}

/// Static table of recognized family relationship codes
pub struct RelationshipCatalog;

impl RelationshipCatalog {
    /// Resolve a relationship-type code to its display descriptor.
    ///
    /// Matching is case-insensitive on the code; anything unrecognized
    /// falls back to [`RelationDescriptor::generic`].
    pub fn resolve(code: &str) -> RelationDescriptor {
        match code.to_lowercase().as_str() {
            "parent" => RelationDescriptor::known("parent", "Parent", "user-round", "#3B82F6"),
            "child" => RelationDescriptor::known("child", "Child", "baby", "#06B6D4"),
            "sibling" => RelationDescriptor::known("sibling", "Sibling", "users", "#10B981"),
            "spouse" => RelationDescriptor::known("spouse", "Spouse", "heart", "#EF4444"),
            "partner" => RelationDescriptor::known("partner", "Partner", "heart-handshake", "#EC4899"),
            "grandparent" => {
                RelationDescriptor::known("grandparent", "Grandparent", "user-round", "#8B5CF6")
            }
            "grandchild" => {
                RelationDescriptor::known("grandchild", "Grandchild", "baby", "#A855F7")
            }
            "aunt" => RelationDescriptor::known("aunt", "Aunt", "user-round", "#F59E0B"),
            "uncle" => RelationDescriptor::known("uncle", "Uncle", "user-round", "#F97316"),
            "cousin" => RelationDescriptor::known("cousin", "Cousin", "users", "#14B8A6"),
            "niece" => RelationDescriptor::known("niece", "Niece", "user-round", "#84CC16"),
            "nephew" => RelationDescriptor::known("nephew", "Nephew", "user-round", "#22C55E"),
            "friend" => RelationDescriptor::known("friend", "Friend", "smile", "#6366F1"),
            "guardian" => RelationDescriptor::known("guardian", "Guardian", "shield", "#0EA5E9"),
            _ => RelationDescriptor::generic(code),
        }
    }

    /// True when the code has a catalog entry
    pub fn is_known(code: &str) -> bool {
        !Self::resolve(code).is_generic()
    }

    /// All recognized descriptors, for the UI legend
    pub fn entries() -> Vec<RelationDescriptor> {
        [
            "parent",
            "child",
            "sibling",
            "spouse",
            "partner",
            "grandparent",
            "grandchild",
            "aunt",
            "uncle",
            "cousin",
            "niece",
            "nephew",
            "friend",
            "guardian",
        ]
        .iter()
        .map(|code| Self::resolve(code))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_resolves() {
        let d = RelationshipCatalog::resolve("parent");
        assert_eq!(d.code, "parent");
        assert_eq!(d.label, "Parent");
        assert_eq!(d.color, "#3B82F6");
        assert!(!d.is_generic());
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!(
            RelationshipCatalog::resolve("Parent"),
            RelationshipCatalog::resolve("parent")
        );
        assert_eq!(
            RelationshipCatalog::resolve("SPOUSE"),
            RelationshipCatalog::resolve("spouse")
        );
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let d = RelationshipCatalog::resolve("step-llama");
        assert_eq!(d.code, "step-llama");
        assert_eq!(d.label, "step-llama"); // code doubles as label
        assert_eq!(d.color, "#6B7280");
        assert!(d.is_generic());
    }

    #[test]
    fn test_is_known() {
        assert!(RelationshipCatalog::is_known("sibling"));
        assert!(RelationshipCatalog::is_known("Sibling"));
        assert!(!RelationshipCatalog::is_known("acquaintance"));
    }

    #[test]
    fn test_entries_cover_the_family_vocabulary() {
        let entries = RelationshipCatalog::entries();
        assert!(entries.len() >= 10);
        assert!(entries.iter().any(|d| d.code == "parent"));
        assert!(entries.iter().any(|d| d.code == "guardian"));
        assert!(entries.iter().all(|d| !d.is_generic()));
    }
}
