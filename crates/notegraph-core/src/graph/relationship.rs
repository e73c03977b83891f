//! Relationship kinds carried on graph edges.
//!
//! - ALIAS: alias text names a document identity
//! - CHILDOF: child content node nests under its parent content node
//! - LINKSTO: content node references a named entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three directed relationships recorded in the note graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// Alias text -> document identity.
    Alias,
    /// Child content node -> parent content node (or document identity).
    ChildOf,
    /// Containing content node -> referenced entity.
    LinksTo,
}

impl Relationship {
    pub const ALL: [Relationship; 3] = [Self::Alias, Self::ChildOf, Self::LinksTo];

    /// Attribute value written on exported edges.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::ChildOf => "childof",
            Self::LinksTo => "linksto",
        }
    }

    /// Upper-case name used in human-readable output.
    pub fn relation_name(&self) -> &'static str {
        match self {
            Self::Alias => "ALIAS",
            Self::ChildOf => "CHILDOF",
            Self::LinksTo => "LINKSTO",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single edge as it leaves the graph: owned endpoints plus relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteEdge {
    /// Source node key.
    pub source: String,
    /// Target node key.
    pub target: String,
    /// Relationship carried by the edge.
    pub relationship: Relationship,
}

impl NoteEdge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relationship: Relationship,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_values() {
        assert_eq!(Relationship::Alias.as_str(), "alias");
        assert_eq!(Relationship::ChildOf.as_str(), "childof");
        assert_eq!(Relationship::LinksTo.as_str(), "linksto");
    }

    #[test]
    fn test_relation_names() {
        let names = Relationship::ALL.map(|r| r.relation_name());
        assert_eq!(names, ["ALIAS", "CHILDOF", "LINKSTO"]);
    }

    #[test]
    fn test_serde_matches_attribute_values() {
        for rel in Relationship::ALL {
            let json = serde_json::to_string(&rel).unwrap();
            assert_eq!(json, format!("\"{}\"", rel.as_str()));
        }
    }
}
