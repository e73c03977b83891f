//! notegraph core: outline-structured markdown notes to a relationship graph.
//!
//! Each note is a file with YAML front matter followed by a nested bullet
//! list. Parsing a corpus yields one directed graph with three kinds of
//! edges: ALIAS (alias -> document), CHILDOF (item -> parent item or
//! document) and LINKSTO (item -> referenced name).

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod markdown;

pub use config::{Config, ConfigError, CorpusConfig, ExportConfig, ParserConfig};
pub use corpus::{collect_documents, path_to_alias, CorpusIndexer, CorpusStats};
pub use error::GraphError;
pub use graph::{ExportFormat, GraphStats, NoteEdge, NoteGraph, Relationship};
pub use markdown::{parse_markdown_to_graph, MarkdownParser, Parser};
