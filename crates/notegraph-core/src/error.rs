//! Graph construction error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a document into graph edges.
///
/// Every variant is fatal for the document being processed. Edges written
/// to the shared graph before the failure point are kept.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Front matter block is missing, unterminated or unparseable.
    #[error("Malformed front matter: {reason}")]
    MalformedFrontMatter { reason: String },

    /// Top-level body content is not a list.
    #[error("Unsupported body shape: expected a list at the top level, found {found}")]
    UnsupportedBody { found: &'static str },

    /// Reference whose payload does not resolve to plain text.
    #[error("Malformed reference: {reference}")]
    MalformedReference { reference: String },

    /// IO error.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Graph export error.
    #[error("Export error: {0}")]
    Export(String),
}

impl GraphError {
    pub fn front_matter(reason: impl Into<String>) -> Self {
        GraphError::MalformedFrontMatter {
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable short name of the failure kind, used in logs and statistics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedFrontMatter { .. } => "malformed_front_matter",
            Self::UnsupportedBody { .. } => "unsupported_body",
            Self::MalformedReference { .. } => "malformed_reference",
            Self::Io { .. } => "io",
            Self::Export(_) => "export",
        }
    }
}

impl From<serde_yaml::Error> for GraphError {
    fn from(err: serde_yaml::Error) -> Self {
        GraphError::front_matter(err.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_distinct() {
        let errors = [
            GraphError::front_matter("missing"),
            GraphError::UnsupportedBody { found: "paragraph" },
            GraphError::MalformedReference {
                reference: "[[#a]]".to_string(),
            },
            GraphError::io("x.md", std::io::Error::other("boom")),
            GraphError::Export("bad".to_string()),
        ];

        let kinds: std::collections::HashSet<_> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn test_display_includes_details() {
        let err = GraphError::UnsupportedBody { found: "paragraph" };
        assert!(err.to_string().contains("paragraph"));

        let err = GraphError::io("notes/a.md", std::io::Error::other("denied"));
        assert!(err.to_string().contains("notes/a.md"));
    }
}
