//! Default values for notegraph configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Parser Defaults
// ============================================================================

/// Front matter key holding the comma separated alias list.
pub const DEFAULT_ALIAS_KEY: &str = "alias";

/// Delimiter between aliases in the alias field.
pub const DEFAULT_ALIAS_DELIMITER: char = ',';

/// Columns a tab advances when measuring list indentation.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Line that opens and closes the front matter block.
pub const FRONT_MATTER_DELIMITER: &str = "---";

// ============================================================================
// Corpus Defaults
// ============================================================================

/// File extensions treated as note documents.
pub const DEFAULT_EXTENSIONS: &[&str] = &["md"];

/// Filename marker that stands for a path separator in a document identity.
pub const DEFAULT_NAMESPACE_MARKER: &str = "___";

/// Separator substituted for the namespace marker.
pub const NAMESPACE_SEPARATOR: &str = "/";

// ============================================================================
// Export Defaults
// ============================================================================

/// Default export format.
pub const DEFAULT_EXPORT_FORMAT: &str = "dot";

/// Graph name written into DOT output.
pub const DOT_GRAPH_NAME: &str = "notegraph";

// ============================================================================
// Config File Locations
// ============================================================================

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "notegraph.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "notegraph";

/// File name inside the user config directory.
pub const USER_CONFIG_FILE: &str = "config.toml";
