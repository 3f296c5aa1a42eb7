// Theme document model
//
// Mirrors the upstream Zed theme family JSON exactly:
// { "$schema"?, "name", "author", "themes": [Variant...] }
//
// Unknown fields at either level are captured via #[serde(flatten)] so the
// tool round-trips upstream additions it does not understand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Style mapping: style-key -> value (usually a hex color string, sometimes
/// an enum string like "blurred" or a nested object for syntax highlighting).
pub type StyleMap = Map<String, Value>;

/// Top-level theme document holding metadata and the ordered variant list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeFamily {
    /// JSON Schema reference URL, present when the output was validated
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    pub name: String,
    pub author: String,

    /// Ordered sequence of palette variants
    pub themes: Vec<Variant>,

    /// Upstream fields we don't model (preserved verbatim)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One concrete named palette/appearance combination within a theme family.
///
/// Cloning a Variant yields a fully independent style map (serde_json values
/// own their tree), so a clone can be mutated without touching the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub appearance: Appearance,
    pub style: StyleMap,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Light/dark flag carried by every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}
