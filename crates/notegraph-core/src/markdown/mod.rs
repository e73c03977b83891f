//! Outline-structured markdown parsing.
//!
//! Converts a note (YAML front matter plus a nested bullet list body) into
//! graph edges:
//!
//! - **ALIAS**: every alias in the front matter names the document
//! - **CHILDOF**: every list item points at its structural parent
//! - **LINKSTO**: every `[[page]]`, `#tag` and `#[[tag]]` reference points
//!   from the content that holds it to the referenced name
//!
//! ## Components
//!
//! - `frontmatter` - metadata/body split and alias normalization
//! - `inline` - reference recognition inside flowing text
//! - `outline` - line-based block parser (lists, items, paragraphs)
//! - `render` - canonical text of a node, nested lists excluded
//! - `traverse` - recursive edge emission
//!
//! # Example
//!
//! ```ignore
//! use notegraph_core::markdown::parse_markdown_to_graph;
//!
//! let graph = parse_markdown_to_graph("foo", "---\nalias: a\n---\n- asdf [[a]]\n")?;
//! assert!(graph.has_edge("asdf [[a]]", "a"));
//! ```

mod frontmatter;
mod inline;
mod node;
mod outline;
mod patterns;
mod render;
mod traits;
mod traverse;

pub use frontmatter::{extract_front_matter, FrontMatter};
pub use inline::parse_inline;
pub use node::{Node, Reference, ReferenceKind};
pub use outline::OutlineParser;
pub use render::{canonical, render};
pub use traits::Parser;
pub use traverse::traverse;

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::GraphError;
use crate::graph::NoteGraph;

/// A parsed document: metadata plus body blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub blocks: Vec<Node>,
}

/// Markdown outline parser.
#[derive(Debug, Clone)]
pub struct MarkdownParser {
    config: ParserConfig,
    outline: OutlineParser,
}

impl MarkdownParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with custom settings.
    pub fn with_config(config: ParserConfig) -> Self {
        let outline = OutlineParser::new(config.tab_width);
        Self { config, outline }
    }

    /// Split and parse a document without touching any graph.
    pub fn parse_document(&self, content: &str) -> Result<Document, GraphError> {
        let (front_matter, body) = extract_front_matter(content, &self.config)?;
        let blocks = self.outline.parse(body);
        Ok(Document {
            front_matter,
            blocks,
        })
    }

    /// Write the edges of one document into `graph`.
    ///
    /// Alias edges go in first, then each top-level list is walked in turn.
    /// A top-level block that is not a list stops the document there.
    pub fn build(
        &self,
        identity: &str,
        content: &str,
        graph: &mut NoteGraph,
    ) -> Result<(), GraphError> {
        let edges_before = graph.edge_count();
        let document = self.parse_document(content)?;

        for alias in &document.front_matter.aliases {
            graph.add_alias(alias, identity);
        }

        for block in &document.blocks {
            match block {
                Node::List(items) => traverse(items, graph, identity)?,
                other => {
                    return Err(GraphError::UnsupportedBody {
                        found: other.kind_name(),
                    });
                }
            }
        }

        debug!(
            identity,
            aliases = document.front_matter.aliases.len(),
            lists = document.blocks.len(),
            edges = graph.edge_count() - edges_before,
            "parsed document"
        );

        Ok(())
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MarkdownParser {
    fn parse_into(
        &self,
        identity: &str,
        content: &str,
        graph: &mut NoteGraph,
    ) -> Result<(), GraphError> {
        self.build(identity, content, graph)
    }

    fn format_name(&self) -> &'static str {
        "Markdown"
    }
}

/// Build a fresh graph from a single document using default settings.
pub fn parse_markdown_to_graph(identity: &str, content: &str) -> Result<NoteGraph, GraphError> {
    let mut graph = NoteGraph::new();
    MarkdownParser::new().build(identity, content, &mut graph)?;
    Ok(graph)
}

/// Add the edges of a single document to an existing graph using default
/// settings.
pub fn extend_graph(
    identity: &str,
    content: &str,
    graph: &mut NoteGraph,
) -> Result<(), GraphError> {
    MarkdownParser::new().build(identity, content, graph)
}
