//! Model registry.
//!
//! Holds the canonical model table, the alias table and the heuristic chain.
//! A registry is built once at startup and only read afterwards; consumers
//! borrow it.

use std::collections::{BTreeMap, HashMap, HashSet};

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::color::BrandColor;
use crate::config::{HeuristicEntry, ModelEntry, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};

/// Built-in models: (id, display name, color).
const BUILTIN_MODELS: &[(&str, &str, &str)] = &[
    ("gpt-5", "GPT\u{2011}5", "#10a37f"),
    ("claude-sonnet-4-5", "Claude Sonnet 4.5", "#ff6b35"),
    ("deepseek-chat-v3.1", "DeepSeek v3.1", "#4d6bfe"),
    ("gemini-2-5-pro", "Gemini 2.5 Pro", "#4285f4"),
    ("grok-4", "Grok 4", "#000000"),
    ("qwen3-max", "Qwen3 Max", "#8b5cf6"),
];

/// Built-in aliases: (alias, canonical id).
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("qwen", "qwen3-max"),
    ("deepseek", "deepseek-chat-v3.1"),
    ("claude sonnet", "claude-sonnet-4-5"),
    ("claude-sonnet", "claude-sonnet-4-5"),
    ("grok", "grok-4"),
    ("grok4", "grok-4"),
    ("gemini", "gemini-2-5-pro"),
    ("gpt5", "gpt-5"),
];

/// Built-in heuristics, evaluated in this order: (pattern, canonical id).
const BUILTIN_HEURISTICS: &[(&str, &str)] = &[
    ("gemini", "gemini-2-5-pro"),
    ("grok", "grok-4"),
    ("deepseek", "deepseek-chat-v3.1"),
    ("claude.*?sonnet|sonnet", "claude-sonnet-4-5"),
    ("qwen", "qwen3-max"),
    ("gpt[- ]?5|gpt5", "gpt-5"),
];

/// Canonical record for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRecord {
    pub id: String,
    pub display_name: String,
    pub color: BrandColor,
}

impl ModelRecord {
    fn from_entry(entry: &ModelEntry) -> RegistryResult<Self> {
        let id = entry.id.trim();
        if id.is_empty() {
            return Err(RegistryError::EmptyModelId);
        }
        if entry.display_name.trim().is_empty() {
            return Err(RegistryError::EmptyDisplayName(id.to_string()));
        }
        Ok(Self {
            id: id.to_string(),
            display_name: entry.display_name.clone(),
            color: BrandColor::parse(&entry.color)?,
        })
    }
}

/// Ordered pattern heuristic.
#[derive(Debug, Clone)]
pub(crate) struct HeuristicRule {
    pub(crate) pattern: Regex,
    pub(crate) target: String,
}

impl HeuristicRule {
    fn compile(pattern: &str, target: &str) -> RegistryResult<Self> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RegistryError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            pattern: compiled,
            target: target.to_string(),
        })
    }
}

/// Immutable model registry.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    pub(crate) models: HashMap<String, ModelRecord>,
    pub(crate) aliases: HashMap<String, String>,
    pub(crate) heuristics: Vec<HeuristicRule>,
    pub(crate) default_color: BrandColor,
}

impl ModelRegistry {
    /// Registry with only the compiled-in models, aliases and heuristics.
    pub fn builtin() -> Self {
        let models = BUILTIN_MODELS
            .iter()
            .map(|(id, name, color)| {
                (
                    id.to_string(),
                    ModelRecord {
                        id: id.to_string(),
                        display_name: name.to_string(),
                        color: BrandColor::from_static(color),
                    },
                )
            })
            .collect();

        let aliases = BUILTIN_ALIASES
            .iter()
            .map(|(alias, target)| (alias.to_string(), target.to_string()))
            .collect();

        let heuristics = BUILTIN_HEURISTICS
            .iter()
            .map(|(pattern, target)| {
                HeuristicRule::compile(pattern, target).expect("built-in heuristic pattern is valid")
            })
            .collect();

        Self {
            models,
            aliases,
            heuristics,
            default_color: BrandColor::neutral(),
        }
    }

    /// Build a registry from configuration.
    ///
    /// Config models are applied first (replacing built-ins with the same
    /// id), then aliases and heuristics, so overlay aliases may point at
    /// overlay models.
    pub fn from_config(config: &RegistryConfig) -> RegistryResult<Self> {
        let mut registry = if config.include_builtin {
            Self::builtin()
        } else {
            Self {
                models: HashMap::new(),
                aliases: HashMap::new(),
                heuristics: Vec::new(),
                default_color: BrandColor::neutral(),
            }
        };

        registry.default_color = BrandColor::parse(&config.default_color)?;

        let mut seen = HashSet::new();
        for entry in &config.models {
            let record = ModelRecord::from_entry(entry)?;
            if !seen.insert(record.id.clone()) {
                return Err(RegistryError::DuplicateModel(record.id));
            }
            if registry.models.contains_key(&record.id) {
                debug!(model_id = %record.id, "Overriding built-in model");
            }
            registry.models.insert(record.id.clone(), record);
        }

        for (alias, target) in &config.aliases {
            let key = alias.trim().to_lowercase();
            if key.is_empty() {
                return Err(RegistryError::EmptyAlias(target.clone()));
            }
            if !registry.models.contains_key(target) {
                return Err(RegistryError::UnknownAliasTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
            registry.aliases.insert(key, target.clone());
        }

        for HeuristicEntry { pattern, target } in &config.heuristics {
            if !registry.models.contains_key(target) {
                return Err(RegistryError::UnknownHeuristicTarget {
                    pattern: pattern.clone(),
                    target: target.clone(),
                });
            }
            registry
                .heuristics
                .push(HeuristicRule::compile(pattern, target)?);
        }

        debug!(
            models = registry.models.len(),
            aliases = registry.aliases.len(),
            heuristics = registry.heuristics.len(),
            "Model registry built"
        );

        Ok(registry)
    }

    /// Canonical record by exact id.
    pub fn get(&self, id: &str) -> Option<&ModelRecord> {
        self.models.get(id)
    }

    /// Check if `id` is a canonical id.
    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    /// Canonical target of an alias key (already lower-cased).
    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// All records, sorted by id.
    pub fn records(&self) -> Vec<&ModelRecord> {
        let mut records: Vec<_> = self.models.values().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    /// Number of canonical models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Color used for unresolved models.
    pub fn default_color(&self) -> &BrandColor {
        &self.default_color
    }

    /// Export the effective registry as a self-contained config.
    pub fn to_config(&self) -> RegistryConfig {
        let models = self
            .records()
            .into_iter()
            .map(|r| ModelEntry {
                id: r.id.clone(),
                display_name: r.display_name.clone(),
                color: r.color.to_string(),
            })
            .collect();

        let aliases: BTreeMap<String, String> = self
            .aliases
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let heuristics = self
            .heuristics
            .iter()
            .map(|h| HeuristicEntry {
                pattern: h.pattern.as_str().to_string(),
                target: h.target.clone(),
            })
            .collect();

        RegistryConfig {
            include_builtin: false,
            default_color: self.default_color.to_string(),
            models,
            aliases,
            heuristics,
        }
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
