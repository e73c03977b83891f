//! End-of-run summary output.

use serde_json::json;
use std::io::{self, Write};

use notegraph_core::{CorpusStats, NoteGraph, Relationship};

/// Write a human-readable summary of a run.
pub fn print(out: &mut impl Write, stats: &CorpusStats, graph: &NoteGraph) -> io::Result<()> {
    let graph_stats = graph.stats();

    writeln!(
        out,
        "Parsed {} documents ({} failed)",
        stats.documents,
        stats.failed()
    )?;
    for failure in &stats.failures {
        let path = failure.path.display();
        writeln!(out, "  {} [{}]: {}", path, failure.kind, failure.message)?;
    }
    writeln!(out, "  Nodes: {}", graph_stats.nodes)?;
    writeln!(out, "  Edges: {}", graph_stats.edges)?;
    for relationship in Relationship::ALL {
        let count = graph_stats.count(relationship);
        writeln!(out, "    {:<8} {}", relationship.relation_name(), count)?;
    }
    writeln!(out, "  Fingerprint: {}", graph.fingerprint())
}

/// Summary of a run as a JSON document.
pub fn to_json(stats: &CorpusStats, graph: &NoteGraph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "corpus": stats,
        "graph": graph.stats(),
        "fingerprint": graph.fingerprint(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notegraph_core::parse_markdown_to_graph;

    fn sample() -> (CorpusStats, NoteGraph) {
        let content = "---\nalias: a\n---\n- item [[a]]\n";
        let graph = parse_markdown_to_graph("foo", content).unwrap();
        let stats = CorpusStats {
            documents: 1,
            ..CorpusStats::default()
        };
        (stats, graph)
    }

    #[test]
    fn test_json_summary() {
        let (stats, graph) = sample();

        let json = to_json(&stats, &graph).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["corpus"]["documents"], 1);
        assert_eq!(value["graph"]["edges"], 3);
        assert_eq!(value["graph"]["linksto"], 1);
        assert_eq!(value["fingerprint"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_text_summary_names_relationships() {
        let (stats, graph) = sample();

        let mut out = Vec::new();
        print(&mut out, &stats, &graph).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Parsed 1 documents (0 failed)"));
        assert!(text.contains("ALIAS    1"));
        assert!(text.contains("CHILDOF  1"));
        assert!(text.contains("LINKSTO  1"));
    }
}
