//! Inline reference recognition.
//!
//! Splits flowing text into plain text runs and references. Reference
//! payloads are left unresolved; the traversal decides what they point at.

use regex::Regex;
use std::sync::LazyLock;

use super::node::{Node, Reference, ReferenceKind};
use super::patterns::REFERENCE_PATTERN;

static REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REFERENCE_PATTERN).expect("valid regex"));

/// Parse a run of text into `Text` and `Reference` nodes.
///
/// Bracketed payloads are parsed recursively, so `[[a #b]]` carries a text
/// node and a tag; such a reference fails to resolve later on.
pub fn parse_inline(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut last = 0;

    for caps in REFERENCE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        let lead = caps
            .name("lead")
            .or_else(|| caps.name("taglead"))
            .map(|m| m.len())
            .unwrap_or(0);
        push_text(&mut nodes, &text[last..whole.start() + lead]);

        let reference = if let Some(body) = caps.name("hashlink") {
            Reference::new(ReferenceKind::HashWikiLink, parse_inline(body.as_str()))
        } else if let Some(body) = caps.name("wikilink") {
            Reference::new(ReferenceKind::WikiLink, parse_inline(body.as_str()))
        } else if let Some(word) = caps.name("tag") {
            Reference::tag(word.as_str())
        } else {
            continue;
        };

        nodes.push(Node::Reference(reference));
        last = whole.end();
    }

    push_text(&mut nodes, &text[last..]);
    nodes
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    // merge with a preceding run so equal text always yields equal nodes
    if let Some(Node::Text(prev)) = nodes.last_mut() {
        prev.push_str(text);
    } else {
        nodes.push(Node::Text(text.to_string()));
    }
}
