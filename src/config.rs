//! Render configuration types.

use serde::{Deserialize, Serialize};

/// A pinned external asset referenced from the page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLibrary {
    /// Base URL of the hosting CDN, without a trailing slash.
    pub base_url: String,
    /// Pinned version number.
    pub version: String,
    /// Path within the versioned distribution.
    pub path: String,
}

impl AssetLibrary {
    /// Create a new pinned asset reference.
    pub fn new(
        base_url: impl Into<String>,
        version: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
            path: path.into(),
        }
    }

    /// Get the full version-addressed URL for this asset.
    pub fn url(&self) -> String {
        format!("{}/{}/{}", self.base_url, self.version, self.path)
    }
}

/// Assets referenced from the page shell head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAssets {
    /// Stylesheet links, emitted in order.
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<AssetLibrary>,
    /// Script tags, emitted in order after the stylesheets.
    #[serde(default = "default_scripts")]
    pub scripts: Vec<AssetLibrary>,
}

const BOOTSTRAP_CDN: &str = "https://maxcdn.bootstrapcdn.com/bootstrap";
const JQUERY_CDN: &str = "https://ajax.googleapis.com/ajax/libs/jquery";

fn default_stylesheets() -> Vec<AssetLibrary> {
    vec![
        AssetLibrary::new(BOOTSTRAP_CDN, "3.3.7", "css/bootstrap.min.css"),
        AssetLibrary::new(BOOTSTRAP_CDN, "3.3.7", "css/bootstrap-theme.min.css"),
    ]
}

fn default_scripts() -> Vec<AssetLibrary> {
    vec![
        AssetLibrary::new(JQUERY_CDN, "1.12.4", "jquery.min.js"),
        AssetLibrary::new(BOOTSTRAP_CDN, "3.3.7", "js/bootstrap.min.js"),
    ]
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            stylesheets: default_stylesheets(),
            scripts: default_scripts(),
        }
    }
}

/// Complete render configuration.
///
/// Immutable once constructed; a renderer built from it may be shared across
/// threads or rebuilt per call with identical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Markup emitted between two field rows.
    #[serde(default = "default_field_separator")]
    pub field_separator: String,
    /// Markup that opens a table: table element, header row, first cell.
    #[serde(default = "default_content_start")]
    pub content_start: String,
    /// Markup emitted between a field name and its value.
    #[serde(default = "default_field_name_value_separator")]
    pub field_name_value_separator: String,
    /// Markup that closes a table: last cell and row, body, table.
    #[serde(default = "default_content_end")]
    pub content_end: String,
    /// Separator between sequence elements. Sequences carry no enclosing
    /// bracket characters.
    #[serde(default = "default_array_separator")]
    pub array_separator: String,
    /// Text shown for null values and absent options.
    #[serde(default = "default_null_text")]
    pub null_text: String,
    /// Show the unqualified type name when a type label is rendered, never
    /// the fully-qualified path.
    #[serde(default = "default_true")]
    pub use_short_type_name: bool,
    /// Emit a type label above each object table.
    #[serde(default)]
    pub use_type_name: bool,
    /// Maximum nesting depth before rendering fails. Guards against cyclic
    /// or runaway-deep value graphs.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// External assets referenced from the page head.
    #[serde(default)]
    pub assets: PageAssets,
}

fn default_field_separator() -> String {
    "</td></tr>\n<tr><td>".to_string()
}

fn default_content_start() -> String {
    "<table class=\"table table-bordered table-condensed table-sm\">\n\
     <thead><tr><th>Field</th><th>Data</th></tr></thead>\
     <tbody><tr><td>"
        .to_string()
}

fn default_field_name_value_separator() -> String {
    "</td><td>".to_string()
}

fn default_content_end() -> String {
    "</td></tr>\n</tbody></table>".to_string()
}

fn default_array_separator() -> String {
    ",".to_string()
}

fn default_null_text() -> String {
    "<null>".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_depth() -> usize {
    64
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            field_separator: default_field_separator(),
            content_start: default_content_start(),
            field_name_value_separator: default_field_name_value_separator(),
            content_end: default_content_end(),
            array_separator: default_array_separator(),
            null_text: default_null_text(),
            use_short_type_name: true,
            use_type_name: false,
            max_depth: default_max_depth(),
            assets: PageAssets::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new render configuration with the default bootstrap styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sequence element separator.
    pub fn with_array_separator(mut self, separator: impl Into<String>) -> Self {
        self.array_separator = separator.into();
        self
    }

    /// Set the text shown for null values.
    pub fn with_null_text(mut self, text: impl Into<String>) -> Self {
        self.null_text = text.into();
        self
    }

    /// Enable or disable the per-table type label.
    pub fn with_type_name(mut self, enabled: bool) -> Self {
        self.use_type_name = enabled;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Replace the page head assets.
    pub fn with_assets(mut self, assets: PageAssets) -> Self {
        self.assets = assets;
        self
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(config.use_short_type_name);
        assert!(!config.use_type_name);
        assert_eq!(config.array_separator, ",");
        assert_eq!(config.null_text, "<null>");
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_config_builder() {
        let config = RenderConfig::new()
            .with_array_separator("; ")
            .with_null_text("-")
            .with_max_depth(8);
        assert_eq!(config.array_separator, "; ");
        assert_eq!(config.null_text, "-");
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_asset_library_url() {
        let lib = AssetLibrary::new(BOOTSTRAP_CDN, "3.3.7", "css/bootstrap.min.css");
        assert_eq!(
            lib.url(),
            "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.7/css/bootstrap.min.css"
        );
    }

    #[test]
    fn test_default_assets_pinned() {
        let assets = PageAssets::default();
        assert_eq!(assets.stylesheets.len(), 2);
        assert_eq!(assets.scripts.len(), 2);
        assert_eq!(
            assets.scripts[0].url(),
            "https://ajax.googleapis.com/ajax/libs/jquery/1.12.4/jquery.min.js"
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = RenderConfig::default();
        let json = config.to_json().unwrap();
        let parsed = RenderConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
