//! Structural tree produced by the outline parser.

use crate::error::GraphError;

use super::render::render;

/// A node of a parsed document body.
///
/// Blocks (`List`, `ListItem`, `Paragraph`) own children; inline content
/// (`Reference`, `Text`) only ever appears inside a paragraph or inside a
/// bracketed reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Bullet list; children are list items.
    List(Vec<Node>),
    /// One bullet; children are paragraphs and nested lists.
    ListItem(Vec<Node>),
    /// Run of text lines; children are inline nodes.
    Paragraph(Vec<Node>),
    /// Inline reference to another entity.
    Reference(Reference),
    /// Plain text.
    Text(String),
}

impl Node {
    /// Human-readable kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::ListItem(_) => "list item",
            Self::Paragraph(_) => "paragraph",
            Self::Reference(_) => "reference",
            Self::Text(_) => "text",
        }
    }

    /// Direct children, in document order.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::List(children) | Self::ListItem(children) | Self::Paragraph(children) => {
                children
            }
            Self::Reference(reference) => &reference.content,
            Self::Text(_) => &[],
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Copy of this node with every direct child list removed.
    ///
    /// The original tree is left untouched so traversal can still descend
    /// into the lists after the node has been named.
    pub fn without_sublists(&self) -> Node {
        let keep = |children: &[Node]| -> Vec<Node> {
            children.iter().filter(|c| !c.is_list()).cloned().collect()
        };

        match self {
            Self::List(children) => Self::List(keep(children)),
            Self::ListItem(children) => Self::ListItem(keep(children)),
            Self::Paragraph(children) => Self::Paragraph(keep(children)),
            other => other.clone(),
        }
    }
}

/// Which inline syntax produced a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `[[target]]`
    WikiLink,
    /// `#target`
    Tag,
    /// `#[[target]]`
    HashWikiLink,
}

/// An inline reference and its parsed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: ReferenceKind,
    /// Inline content between the delimiters.
    pub content: Vec<Node>,
}

impl Reference {
    pub fn new(kind: ReferenceKind, content: Vec<Node>) -> Self {
        Self { kind, content }
    }

    /// Tag reference holding a single word.
    pub fn tag(word: impl Into<String>) -> Self {
        Self::new(ReferenceKind::Tag, vec![Node::Text(word.into())])
    }

    /// Name of the referenced entity.
    ///
    /// The payload must be exactly one non-blank text node; anything else
    /// (nested references, empty brackets) is a malformed reference.
    pub fn target(&self) -> Result<&str, GraphError> {
        match self.content.as_slice() {
            [Node::Text(text)] if !text.trim().is_empty() => Ok(text.trim()),
            _ => Err(GraphError::MalformedReference {
                reference: render(&Node::Reference(self.clone())),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    #[test]
    fn test_without_sublists_keeps_original() {
        let item = Node::ListItem(vec![
            Node::Paragraph(vec![text("parent")]),
            Node::List(vec![Node::ListItem(vec![Node::Paragraph(vec![text("child")])])]),
        ]);

        let pruned = item.without_sublists();
        assert_eq!(pruned.children().len(), 1);
        assert_eq!(item.children().len(), 2);
        assert!(item.children()[1].is_list());
    }

    #[test]
    fn test_target_trims_payload() {
        let reference = Reference::new(ReferenceKind::WikiLink, vec![text("  page name ")]);
        assert_eq!(reference.target().unwrap(), "page name");
    }

    #[test]
    fn test_target_rejects_nested_reference() {
        let reference = Reference::new(
            ReferenceKind::WikiLink,
            vec![Node::Reference(Reference::tag("inner"))],
        );
        assert!(matches!(
            reference.target(),
            Err(GraphError::MalformedReference { .. })
        ));
    }

    #[test]
    fn test_target_rejects_blank_payload() {
        let reference = Reference::new(ReferenceKind::HashWikiLink, vec![text("   ")]);
        assert!(reference.target().is_err());

        let empty = Reference::new(ReferenceKind::WikiLink, Vec::new());
        assert!(empty.target().is_err());
    }
}
