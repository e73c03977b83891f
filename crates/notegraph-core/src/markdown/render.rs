//! Markdown rendering of parsed nodes.
//!
//! Output uses the same grammar the outline parser reads, so rendered text
//! parses back into the same tree.

use super::node::{Node, ReferenceKind};
use super::patterns::RENDER_INDENT;

/// Render a node back to markdown.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Graph key for a content node: its own text with nested lists dropped,
/// trimmed of surrounding whitespace.
pub fn canonical(node: &Node) -> String {
    render(&node.without_sublists()).trim().to_string()
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Reference(reference) => {
            let (open, close) = match reference.kind {
                ReferenceKind::WikiLink => ("[[", "]]"),
                ReferenceKind::Tag => ("#", ""),
                ReferenceKind::HashWikiLink => ("#[[", "]]"),
            };
            out.push_str(open);
            for child in &reference.content {
                write_node(child, out);
            }
            out.push_str(close);
        }
        Node::Paragraph(children) => {
            for child in children {
                write_node(child, out);
            }
        }
        Node::ListItem(children) => {
            let mut prev: Option<&Node> = None;
            for child in children {
                if let Some(prev) = prev {
                    // consecutive paragraphs need a blank line to stay apart
                    if prev.is_list() || child.is_list() {
                        out.push('\n');
                    } else {
                        out.push_str("\n\n");
                    }
                }
                write_node(child, out);
                prev = Some(child);
            }
        }
        Node::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_bullet(&render(item), out);
            }
        }
    }
}

fn write_bullet(content: &str, out: &mut String) {
    out.push('-');
    for (i, line) in content.lines().enumerate() {
        if i == 0 {
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
        } else {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(RENDER_INDENT);
                out.push_str(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::outline::OutlineParser;

    fn parse_one(body: &str) -> Node {
        OutlineParser::new(4).parse(body).remove(0)
    }

    #[test]
    fn test_references_round_trip() {
        let list = parse_one("- a [[b]] #c #[[d e]]");
        let item = &list.children()[0];
        assert_eq!(canonical(item), "a [[b]] #c #[[d e]]");
    }

    #[test]
    fn test_canonical_excludes_sublists() {
        let list = parse_one("- parent [[x]]\n  - child\n    - grandchild");
        let item = &list.children()[0];
        assert_eq!(canonical(item), "parent [[x]]");

        let bare = parse_one("- parent [[x]]");
        assert_eq!(canonical(item), canonical(&bare.children()[0]));
    }

    #[test]
    fn test_canonical_leaves_tree_intact() {
        let list = parse_one("- parent\n  - child");
        let before = list.clone();
        let _ = canonical(&list.children()[0]);
        assert_eq!(list, before);
    }

    #[test]
    fn test_render_list_reparses() {
        let body = "- one [[a]]\n  continued\n  - two #b\n\n    second para\n- three";
        let list = parse_one(body);
        let rendered = render(&list);
        assert_eq!(parse_one(&rendered), list);
    }

    #[test]
    fn test_canonical_is_trimmed() {
        let list = parse_one("-    spaced out   ");
        assert_eq!(canonical(&list.children()[0]), "spaced out");
    }
}
