//! Regex patterns and markers for the outline grammar.

/// Inline references, tried left to right at each position:
/// `#[[multi word tag]]`, `[[page]]`, `#tag`.
///
/// Both hash forms need start-of-text or whitespace in front of the `#`,
/// captured in `lead`/`taglead` so it can be handed back as plain text.
pub const REFERENCE_PATTERN: &str = concat!(
    r"(?P<lead>^|\s)#\[\[(?P<hashlink>[^\]]+)\]\]",
    r"|\[\[(?P<wikilink>[^\]]+)\]\]",
    r"|(?P<taglead>^|\s)#(?P<tag>\w+)",
);

/// Characters that open a bullet when followed by whitespace.
pub const BULLET_MARKERS: &[char] = &['-', '*', '+'];

/// Indentation added per nesting level when rendering lists.
pub const RENDER_INDENT: &str = "  ";
