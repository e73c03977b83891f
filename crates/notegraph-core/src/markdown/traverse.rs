//! Recursive walk that turns a block tree into graph edges.

use crate::error::GraphError;
use crate::graph::NoteGraph;

use super::node::Node;
use super::render::canonical;

/// Walk `items` in document order, writing edges under `parent`.
///
/// - a reference adds `parent -> target` (LINKSTO)
/// - a list regroups its items under the same `parent`
/// - a list item or paragraph becomes a node named by its canonical text,
///   gets `node -> parent` (CHILDOF) unless that would be a self-loop, and
///   becomes the parent of its own children
///
/// Stops at the first malformed reference; edges already written stay.
pub fn traverse(items: &[Node], graph: &mut NoteGraph, parent: &str) -> Result<(), GraphError> {
    for item in items {
        if let Node::Reference(reference) = item {
            graph.add_links_to(parent, reference.target()?);
        }

        match item {
            Node::List(children) => traverse(children, graph, parent)?,
            Node::ListItem(children) | Node::Paragraph(children) => {
                let node = canonical(item);
                if node != parent {
                    graph.add_child_of(&node, parent);
                }
                traverse(children, graph, &node)?;
            }
            Node::Reference(_) | Node::Text(_) => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Relationship;
    use crate::markdown::outline::OutlineParser;

    fn walk(body: &str, identity: &str) -> Result<NoteGraph, GraphError> {
        let mut graph = NoteGraph::new();
        let blocks = OutlineParser::new(4).parse(body);
        traverse(&blocks, &mut graph, identity)?;
        Ok(graph)
    }

    #[test]
    fn test_item_paragraph_does_not_loop() {
        let graph = walk("- only item", "doc").unwrap();
        assert!(graph.has_relationship("only item", "doc", Relationship::ChildOf));
        assert!(!graph.has_edge("only item", "only item"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_reference_owned_by_item() {
        let graph = walk("- see [[Target]]", "doc").unwrap();
        assert!(graph.has_relationship("see [[Target]]", "Target", Relationship::LinksTo));
    }

    #[test]
    fn test_second_paragraph_nests_under_item() {
        let graph = walk("- intro #t\n\n  detail", "doc").unwrap();
        let item = "intro #t\n\ndetail";
        assert!(graph.has_relationship(item, "doc", Relationship::ChildOf));
        assert!(graph.has_relationship("intro #t", item, Relationship::ChildOf));
        assert!(graph.has_relationship("detail", item, Relationship::ChildOf));
        assert!(graph.has_relationship("intro #t", "t", Relationship::LinksTo));
    }

    #[test]
    fn test_malformed_reference_keeps_earlier_edges() {
        let err = walk("- fine\n- bad [[#nested]]", "doc");
        assert!(matches!(err, Err(GraphError::MalformedReference { .. })));

        let mut graph = NoteGraph::new();
        let blocks = OutlineParser::new(4).parse("- fine\n- bad [[#nested]]");
        let _ = traverse(&blocks, &mut graph, "doc");
        assert!(graph.has_relationship("fine", "doc", Relationship::ChildOf));
    }
}
