//! Front matter extraction.
//!
//! A document starts with a YAML block between two `---` lines. The block
//! is parsed into a flat key/value map; the alias field is normalized into
//! a list of trimmed strings.

use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::config::{ParserConfig, FRONT_MATTER_DELIMITER};
use crate::error::GraphError;

/// Parsed metadata block of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// All metadata fields; the alias field holds a sequence of strings.
    pub fields: BTreeMap<String, Value>,
    /// Aliases in declaration order, duplicates and empty strings kept.
    pub aliases: Vec<String>,
}

impl FrontMatter {
    /// Look up a metadata field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Split a document into its front matter and trimmed body.
pub fn extract_front_matter<'a>(
    text: &'a str,
    config: &ParserConfig,
) -> Result<(FrontMatter, &'a str), GraphError> {
    let (block, body) = split_front_matter(text)?;
    let mut fields = parse_fields(block)?;

    let aliases = match fields.get(&config.alias_key) {
        Some(value) => normalize_aliases(value, config.alias_delimiter)?,
        None => Vec::new(),
    };
    if fields.contains_key(&config.alias_key) {
        let normalized = aliases.iter().cloned().map(Value::String).collect();
        fields.insert(config.alias_key.clone(), Value::Sequence(normalized));
    }

    Ok((FrontMatter { fields, aliases }, body.trim()))
}

/// Locate the opening and closing delimiter lines.
///
/// The opening delimiter must be the first non-blank line (a leading BOM
/// is skipped). Returns the raw metadata block and everything after the
/// closing delimiter.
fn split_front_matter(text: &str) -> Result<(&str, &str), GraphError> {
    let text = text.trim_start_matches('\u{feff}');

    let mut offset = 0;
    let mut block_start = None;

    for line in text.split_inclusive('\n') {
        let line_end = offset + line.len();
        let is_delimiter = line.trim_end() == FRONT_MATTER_DELIMITER;

        match block_start {
            None if is_delimiter => block_start = Some(line_end),
            None if line.trim().is_empty() => {}
            None => {
                return Err(GraphError::front_matter(format!(
                    "document must start with a '{}' line",
                    FRONT_MATTER_DELIMITER
                )));
            }
            Some(start) if is_delimiter => return Ok((&text[start..offset], &text[line_end..])),
            Some(_) => {}
        }

        offset = line_end;
    }

    let reason = match block_start {
        None => format!("missing opening '{}' line", FRONT_MATTER_DELIMITER),
        Some(_) => format!("missing closing '{}' line", FRONT_MATTER_DELIMITER),
    };
    Err(GraphError::front_matter(reason))
}

fn parse_fields(block: &str) -> Result<BTreeMap<String, Value>, GraphError> {
    if block.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    match serde_yaml::from_str::<Value>(block)? {
        Value::Null => Ok(BTreeMap::new()),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| match key {
                Value::String(key) => Ok((key, value)),
                other => Err(GraphError::front_matter(format!(
                    "metadata keys must be strings, found {:?}",
                    other
                ))),
            })
            .collect(),
        _ => Err(GraphError::front_matter("metadata block is not a key/value mapping")),
    }
}

/// Turn the raw alias value into a list of trimmed names.
///
/// A string (or scalar) is split on `delimiter`; empty segments are kept.
/// A YAML list is taken element by element. Null means no aliases.
fn normalize_aliases(value: &Value, delimiter: char) -> Result<Vec<String>, GraphError> {
    let split = |s: &str| {
        s.split(delimiter)
            .map(|part| part.trim().to_string())
            .collect()
    };

    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(split(s)),
        Value::Number(n) => Ok(split(&n.to_string())),
        Value::Bool(b) => Ok(split(&b.to_string())),
        Value::Sequence(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.trim().to_string()),
                other => Err(GraphError::front_matter(format!(
                    "alias list entries must be strings, found {:?}",
                    other
                ))),
            })
            .collect(),
        other => Err(GraphError::front_matter(format!(
            "alias field must be a string or a list of strings, found {:?}",
            other
        ))),
    }
}
