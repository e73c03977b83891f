//! Core parser trait for turning documents into graph edges.

use crate::error::GraphError;
use crate::graph::NoteGraph;

/// Document parser trait.
///
/// Implement this trait for each document format. A parser is responsible
/// for:
///
/// 1. **Metadata**: reading aliases declared by the document
/// 2. **Structure**: turning nesting into CHILDOF edges
/// 3. **References**: turning inline references into LINKSTO edges
///
/// # Example Implementation
///
/// ```ignore
/// impl Parser for MarkdownParser {
///     fn parse_into(
///         &self,
///         identity: &str,
///         content: &str,
///         graph: &mut NoteGraph,
///     ) -> Result<(), GraphError> {
///         let (front_matter, body) = extract_front_matter(content, &self.config)?;
///         // Add alias edges, then walk the body...
///     }
///
///     fn format_name(&self) -> &'static str { "Markdown" }
/// }
/// ```
pub trait Parser: Send + Sync {
    /// Parse a document and write its edges into `graph`.
    ///
    /// # Arguments
    /// * `identity` - Document identity, the root node for top-level items
    /// * `content` - Raw document text
    /// * `graph` - Graph shared across the corpus
    ///
    /// # Returns
    /// * `Ok(())` - All edges of the document were written
    /// * `Err(GraphError)` - The document is malformed; edges written before
    ///   the failure point stay in the graph
    fn parse_into(
        &self,
        identity: &str,
        content: &str,
        graph: &mut NoteGraph,
    ) -> Result<(), GraphError>;

    /// Human-readable format name, recorded in per-document logs.
    fn format_name(&self) -> &'static str;
}
