//! Registry configuration.
//!
//! The built-in table covers the models the dashboard ships with. A
//! `[registry]` section in the application config can extend or override it
//! without a code change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::DEFAULT_COLOR;

/// One model entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Canonical id.
    pub id: String,
    /// Label shown in every view.
    pub display_name: String,
    /// Hex brand color.
    pub color: String,
}

/// One substring/pattern heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicEntry {
    /// Regex matched against the lower-cased identifier.
    pub pattern: String,
    /// Canonical id returned on match.
    pub target: String,
}

/// Registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Start from the built-in models, aliases and heuristics.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    /// Color for unresolved models.
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Extra models; an id already present replaces the existing record.
    #[serde(default)]
    pub models: Vec<ModelEntry>,
    /// Extra aliases (alias -> canonical id).
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Extra heuristics, tried after the built-in ones.
    #[serde(default)]
    pub heuristics: Vec<HeuristicEntry>,
}

fn default_include_builtin() -> bool {
    true
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
            default_color: default_color(),
            models: Vec::new(),
            aliases: BTreeMap::new(),
            heuristics: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// True when the config adds nothing to the built-in registry.
    pub fn is_builtin_only(&self) -> bool {
        self.include_builtin
            && self.default_color == DEFAULT_COLOR
            && self.models.is_empty()
            && self.aliases.is_empty()
            && self.heuristics.is_empty()
    }
}
