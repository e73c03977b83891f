//! Graph export for visualization and debugging.
//!
//! - DOT: Graphviz digraph, one `relationship` attribute per edge
//! - JSON: `{ nodes, edges }` document

use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use super::{NoteEdge, NoteGraph};
use crate::config::DOT_GRAPH_NAME;
use crate::error::GraphError;

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT.
    #[default]
    Dot,
    /// JSON node/edge lists.
    Json,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" | "gv" => Ok(Self::Dot),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format '{}' (expected dot or json)", other)),
        }
    }
}

/// Full graph as serialized to JSON.
#[derive(Debug, Serialize)]
pub struct GraphData {
    pub nodes: Vec<String>,
    pub edges: Vec<NoteEdge>,
}

impl From<&NoteGraph> for GraphData {
    fn from(graph: &NoteGraph) -> Self {
        Self {
            nodes: graph.nodes().map(str::to_string).collect(),
            edges: graph.edge_list(),
        }
    }
}

/// Render the graph as a Graphviz DOT string.
pub fn to_dot(graph: &NoteGraph) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "digraph {} {{", DOT_GRAPH_NAME);
    for node in graph.nodes() {
        let _ = writeln!(out, "    {};", quote(node));
    }
    for (source, target, relationship) in graph.edges() {
        let _ = writeln!(
            out,
            "    {} -> {} [relationship={}];",
            quote(source),
            quote(target),
            quote(relationship.as_str())
        );
    }
    out.push_str("}\n");
    out
}

/// Render the graph as pretty-printed JSON.
pub fn to_json(graph: &NoteGraph) -> Result<String, GraphError> {
    Ok(serde_json::to_string_pretty(&GraphData::from(graph))?)
}

/// Write the graph to `path` in the given format.
pub fn write_graph(graph: &NoteGraph, path: &Path, format: ExportFormat) -> Result<(), GraphError> {
    let content = match format {
        ExportFormat::Dot => to_dot(graph),
        ExportFormat::Json => to_json(graph)?,
    };
    std::fs::write(path, content).map_err(|e| GraphError::io(path, e))
}

/// Quote a DOT identifier.
fn quote(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2);
    out.push('"');
    for c in id.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("dot".parse::<ExportFormat>().unwrap(), ExportFormat::Dot);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("graphml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ExportFormat::Dot.extension(), "dot");
        assert_eq!(ExportFormat::Json.extension(), "json");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_dot_lists_edges_with_relationship() {
        let mut graph = NoteGraph::new();
        graph.add_alias("a", "foo");
        graph.add_child_of("asdf [[a]]", "foo");

        let dot = to_dot(&graph);
        assert!(dot.starts_with("digraph notegraph {"));
        assert!(dot.contains("\"a\" -> \"foo\" [relationship=\"alias\"];"));
        assert!(dot.contains("\"asdf [[a]]\" -> \"foo\" [relationship=\"childof\"];"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_json_shape() {
        let mut graph = NoteGraph::new();
        graph.add_links_to("item", "target");

        let json: serde_json::Value = serde_json::from_str(&to_json(&graph).unwrap()).unwrap();
        assert_eq!(json["nodes"], serde_json::json!(["item", "target"]));
        assert_eq!(json["edges"][0]["source"], "item");
        assert_eq!(json["edges"][0]["target"], "target");
        assert_eq!(json["edges"][0]["relationship"], "linksto");
    }
}
