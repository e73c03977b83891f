//! Line-based outline parser.
//!
//! Turns a document body into a block tree in two passes:
//! 1. Classify every line as blank, bullet or text, measuring indentation
//! 2. Recursive descent over the classified lines, nesting by indentation
//!
//! Grammar:
//! - a bullet is `-`, `*` or `+` followed by whitespace or end of line;
//!   ordered markers (`1.`, `2)`) are not bullets and read as text
//! - a bullet indented deeper than the current item opens a nested list
//! - text lines directly after a bullet line continue its paragraph
//! - text lines after a blank line, indented under an item, add a paragraph
//! - blank lines separate but never close a list

use super::inline::parse_inline;
use super::node::Node;
use super::patterns::BULLET_MARKERS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Bullet { indent: usize, text: &'a str },
    Text { indent: usize, text: &'a str },
}

impl<'a> Line<'a> {
    fn classify(raw: &'a str, tab_width: usize) -> Self {
        let mut indent = 0;
        let mut offset = raw.len();
        for (i, c) in raw.char_indices() {
            match c {
                ' ' => indent += 1,
                '\t' => indent = (indent / tab_width + 1) * tab_width,
                _ => {
                    offset = i;
                    break;
                }
            }
        }

        let rest = raw[offset..].trim_end();
        if rest.is_empty() {
            return Line::Blank;
        }

        let mut chars = rest.chars();
        if let Some(marker) = chars.next() {
            if BULLET_MARKERS.contains(&marker) {
                let after = chars.as_str();
                if after.is_empty() || after.starts_with(char::is_whitespace) {
                    return Line::Bullet {
                        indent,
                        text: after.trim_start(),
                    };
                }
            }
        }

        Line::Text { indent, text: rest }
    }
}

/// Parser for outline-structured markdown bodies.
#[derive(Debug, Clone)]
pub struct OutlineParser {
    tab_width: usize,
}

impl OutlineParser {
    pub fn new(tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
        }
    }

    /// Parse a body into its top-level blocks.
    ///
    /// Never fails: anything that is not a bullet becomes a paragraph, and
    /// the caller decides which top-level shapes it accepts.
    pub fn parse(&self, body: &str) -> Vec<Node> {
        let lines: Vec<Line<'_>> = body
            .lines()
            .map(|raw| Line::classify(raw, self.tab_width))
            .collect();

        let mut cursor = Cursor { lines, pos: 0 };
        cursor.document()
    }
}

struct Cursor<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Index of the next non-blank line, without consuming anything.
    fn peek_content(&self) -> Option<(usize, Line<'a>)> {
        self.lines[self.pos..]
            .iter()
            .enumerate()
            .find(|(_, line)| **line != Line::Blank)
            .map(|(i, line)| (self.pos + i, *line))
    }

    fn document(&mut self) -> Vec<Node> {
        let mut blocks = Vec::new();

        while let Some((idx, line)) = self.peek_content() {
            self.pos = idx;
            match line {
                Line::Bullet { indent, .. } => blocks.push(self.list(indent)),
                Line::Text { .. } => blocks.push(self.paragraph(Vec::new())),
                Line::Blank => self.pos += 1,
            }
        }

        blocks
    }

    fn list(&mut self, indent: usize) -> Node {
        let mut items = Vec::new();

        while let Some((idx, line)) = self.peek_content() {
            match line {
                Line::Bullet { indent: i, text } if i == indent => {
                    self.pos = idx + 1;
                    items.push(self.item(indent, text));
                }
                _ => break,
            }
        }

        Node::List(items)
    }

    fn item(&mut self, indent: usize, first: &'a str) -> Node {
        let mut children = Vec::new();

        let paragraph = self.paragraph(vec![first]);
        if !paragraph.children().is_empty() {
            children.push(paragraph);
        }

        while let Some((idx, line)) = self.peek_content() {
            match line {
                Line::Bullet { indent: i, .. } if i > indent => {
                    self.pos = idx;
                    children.push(self.list(i));
                }
                Line::Text { indent: i, .. } if i > indent => {
                    self.pos = idx;
                    children.push(self.paragraph(Vec::new()));
                }
                _ => break,
            }
        }

        Node::ListItem(children)
    }

    /// Consume consecutive text lines into one paragraph, starting from
    /// any lines the caller already took.
    fn paragraph(&mut self, mut text: Vec<&'a str>) -> Node {
        while let Some(Line::Text { text: line, .. }) = self.lines.get(self.pos).copied() {
            text.push(line);
            self.pos += 1;
        }

        Node::Paragraph(parse_inline(&text.join("\n")))
    }
}
