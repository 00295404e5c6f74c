//! Canonical-id resolution.
//!
//! Strategies run in a fixed order and the first hit wins:
//!
//! 1. exact canonical id (before any normalization, so ids such as
//!    `deepseek-chat-v3.1` keep their dot)
//! 2. normalized canonical id
//! 3. alias, lower-cased
//! 4. alias, normalized
//! 5. alias, with only `.`/`_` folded to `-`
//! 6. heuristics (substring/pattern), in registry order
//!
//! Heuristics are the weakest evidence and only run after every table
//! lookup has missed. An id with no table entry that happens to contain a
//! brand substring is folded into that brand (`gpt-5-turbo` -> `gpt-5`).

use serde::Serialize;
use tracing::{debug, trace};

use crate::normalize::{fold_punctuation, normalize_id};
use crate::registry::ModelRegistry;

/// Which strategy produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    Exact,
    Normalized,
    Alias,
    NormalizedAlias,
    FoldedAlias,
    Heuristic,
}

impl MatchStrategy {
    /// True for table lookups, false for the heuristic fallback.
    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Heuristic)
    }
}

/// A successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution<'r> {
    pub canonical_id: &'r str,
    pub strategy: MatchStrategy,
}

impl ModelRegistry {
    /// Resolve an identifier to its canonical id.
    ///
    /// `None` and empty input resolve to `None`.
    ///
    /// ```
    /// use arena_registry::ModelRegistry;
    ///
    /// let registry = ModelRegistry::builtin();
    /// assert_eq!(registry.resolve_canonical_id("Gemini 2.5 Pro"), Some("gemini-2-5-pro"));
    /// assert_eq!(registry.resolve_canonical_id(None::<&str>), None);
    /// ```
    pub fn resolve_canonical_id<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<&str> {
        self.resolve(input).map(|r| r.canonical_id)
    }

    /// Resolve an identifier, reporting which strategy matched.
    pub fn resolve<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<Resolution<'_>> {
        let raw = input.into().filter(|s| !s.is_empty())?;

        let resolution = self.resolve_structured(raw).or_else(|| self.resolve_heuristic(raw));

        match &resolution {
            Some(r) if r.strategy.is_structured() => {
                trace!(input = raw, canonical_id = r.canonical_id, strategy = ?r.strategy, "Resolved model id");
            }
            Some(r) => {
                debug!(input = raw, canonical_id = r.canonical_id, "Model id resolved by heuristic");
            }
            None => {
                trace!(input = raw, "Model id unresolved");
            }
        }

        resolution
    }

    fn resolve_structured(&self, raw: &str) -> Option<Resolution<'_>> {
        let hit = |canonical_id: &str, strategy| {
            self.models.get_key_value(canonical_id).map(|(id, _)| Resolution {
                canonical_id: id.as_str(),
                strategy,
            })
        };

        if let Some(r) = hit(raw, MatchStrategy::Exact) {
            return Some(r);
        }

        let normalized = normalize_id(raw);
        if let Some(r) = hit(normalized.as_str(), MatchStrategy::Normalized) {
            return Some(r);
        }

        let lower = raw.trim().to_lowercase();
        let folded = fold_punctuation(raw);
        let alias_keys = [
            (lower.as_str(), MatchStrategy::Alias),
            (normalized.as_str(), MatchStrategy::NormalizedAlias),
            (folded.as_str(), MatchStrategy::FoldedAlias),
        ];

        let found = alias_keys.into_iter().find_map(|(key, strategy)| {
            self.alias_target(key)
                .and_then(|target| hit(target, strategy))
        });
        found
    }

    fn resolve_heuristic(&self, raw: &str) -> Option<Resolution<'_>> {
        let lower = raw.to_lowercase();
        self.heuristics
            .iter()
            .find(|rule| rule.pattern.is_match(&lower))
            .and_then(|rule| self.models.get_key_value(rule.target.as_str()))
            .map(|(id, _)| Resolution {
                canonical_id: id.as_str(),
                strategy: MatchStrategy::Heuristic,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HeuristicEntry, ModelEntry, RegistryConfig};

    fn registry() -> ModelRegistry {
        ModelRegistry::builtin()
    }

    #[test]
    fn test_canonical_ids_resolve_to_themselves() {
        let registry = registry();
        for record in registry.records() {
            let r = registry.resolve(record.id.as_str()).unwrap();
            assert_eq!(r.canonical_id, record.id);
            assert_eq!(r.strategy, MatchStrategy::Exact);
        }
    }

    #[test]
    fn test_empty_and_missing_input() {
        let registry = registry();
        assert_eq!(registry.resolve_canonical_id(None::<&str>), None);
        assert_eq!(registry.resolve_canonical_id(""), None);
        assert_eq!(registry.resolve_canonical_id(Some("")), None);
    }

    #[test]
    fn test_aliases_resolve_case_insensitively() {
        let registry = registry();
        let aliases: Vec<(String, String)> = registry
            .aliases
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (alias, target) in aliases {
            assert_eq!(registry.resolve_canonical_id(alias.as_str()), Some(target.as_str()));
            let upper = alias.to_uppercase();
            assert_eq!(registry.resolve_canonical_id(upper.as_str()), Some(target.as_str()));
        }
    }

    #[test]
    fn test_punctuation_invariance() {
        let registry = registry();
        let dotted = registry.resolve("gemini-2.5-pro").unwrap();
        let dashed = registry.resolve("gemini-2-5-pro").unwrap();
        assert_eq!(dotted.canonical_id, "gemini-2-5-pro");
        assert_eq!(dashed.canonical_id, "gemini-2-5-pro");
        assert_eq!(dotted.strategy, MatchStrategy::Normalized);
        assert_eq!(dashed.strategy, MatchStrategy::Exact);
    }

    #[test]
    fn test_exact_match_keeps_dot() {
        let registry = registry();
        let r = registry.resolve("deepseek-chat-v3.1").unwrap();
        assert_eq!(r.canonical_id, "deepseek-chat-v3.1");
        assert_eq!(r.strategy, MatchStrategy::Exact);
    }

    #[test]
    fn test_strategy_order() {
        let registry = registry();
        assert_eq!(registry.resolve("Claude Sonnet 4.5").unwrap().strategy, MatchStrategy::Normalized);
        assert_eq!(registry.resolve("Claude Sonnet").unwrap().strategy, MatchStrategy::Alias);
        assert_eq!(registry.resolve("Claude_Sonnet").unwrap().strategy, MatchStrategy::NormalizedAlias);
        assert_eq!(registry.resolve("GROK4").unwrap().strategy, MatchStrategy::Alias);
        assert_eq!(
            registry.resolve("some-random-deepseek-variant").unwrap().strategy,
            MatchStrategy::Heuristic
        );
    }

    #[test]
    fn test_folded_alias_keeps_hyphens() {
        // "a-.b" normalizes to "a-b" but folds to "a--b"; only the folded
        // alias key matches.
        let mut config = RegistryConfig::default();
        config.aliases.insert("grok--beta".to_string(), "grok-4".to_string());
        let registry = ModelRegistry::from_config(&config).unwrap();

        let r = registry.resolve("Grok-.Beta").unwrap();
        assert_eq!(r.canonical_id, "grok-4");
        assert_eq!(r.strategy, MatchStrategy::FoldedAlias);
    }

    #[test]
    fn test_folded_alias_requires_unpadded_input() {
        let mut config = RegistryConfig::default();
        config.aliases.insert("grok--beta".to_string(), "grok-4".to_string());
        let registry = ModelRegistry::from_config(&config).unwrap();

        // Padding survives folding, so only the brand heuristic matches.
        let r = registry.resolve(" Grok-.Beta ").unwrap();
        assert_eq!(r.canonical_id, "grok-4");
        assert_eq!(r.strategy, MatchStrategy::Heuristic);
    }

    #[test]
    fn test_heuristic_order() {
        let registry = registry();
        // gemini is checked before grok
        assert_eq!(registry.resolve_canonical_id("grok-vs-gemini"), Some("gemini-2-5-pro"));
        assert_eq!(registry.resolve_canonical_id("my-grok-bot"), Some("grok-4"));
        assert_eq!(registry.resolve_canonical_id("DeepSeek-R1"), Some("deepseek-chat-v3.1"));
        assert_eq!(registry.resolve_canonical_id("claude-3-7-sonnet"), Some("claude-sonnet-4-5"));
        assert_eq!(registry.resolve_canonical_id("sonnet-only"), Some("claude-sonnet-4-5"));
        assert_eq!(registry.resolve_canonical_id("qwen2.5-72b"), Some("qwen3-max"));
        assert_eq!(registry.resolve_canonical_id("openai/gpt 5"), Some("gpt-5"));
        assert_eq!(registry.resolve_canonical_id("GPT5-preview"), Some("gpt-5"));
    }

    #[test]
    fn test_gpt_pattern_requires_five() {
        let registry = registry();
        assert_eq!(registry.resolve_canonical_id("gpt-4o"), None);
        assert_eq!(registry.resolve_canonical_id("gpt_5"), Some("gpt-5"));
    }

    #[test]
    fn test_unresolvable() {
        let registry = registry();
        assert_eq!(registry.resolve_canonical_id("totally-unknown-xyz"), None);
        assert_eq!(registry.resolve_canonical_id("   "), None);
    }

    #[test]
    fn test_alias_outranks_heuristic() {
        // Contains "gemini" (heuristic for Gemini) but is an exact alias for GPT-5.
        let mut config = RegistryConfig::default();
        config
            .aliases
            .insert("gemini-killer-gpt".to_string(), "gpt-5".to_string());
        let registry = ModelRegistry::from_config(&config).unwrap();

        let r = registry.resolve("Gemini-Killer-GPT").unwrap();
        assert_eq!(r.canonical_id, "gpt-5");
        assert_eq!(r.strategy, MatchStrategy::Alias);
    }

    #[test]
    fn test_canonical_outranks_heuristic() {
        let config = RegistryConfig {
            models: vec![ModelEntry {
                id: "gpt-5-mini".to_string(),
                display_name: "GPT-5 Mini".to_string(),
                color: "#0f766e".to_string(),
            }],
            ..Default::default()
        };
        let registry = ModelRegistry::from_config(&config).unwrap();
        assert_eq!(registry.resolve_canonical_id("gpt-5-mini"), Some("gpt-5-mini"));
        assert_eq!(registry.resolve_canonical_id("GPT 5 Mini"), Some("gpt-5-mini"));
    }

    #[test]
    fn test_unlisted_variant_folds_into_brand() {
        // Known limitation: no table entry, so the heuristic wins.
        let registry = registry();
        let r = registry.resolve("gpt-5-turbo").unwrap();
        assert_eq!(r.canonical_id, "gpt-5");
        assert_eq!(r.strategy, MatchStrategy::Heuristic);
    }

    #[test]
    fn test_config_heuristics_run_last() {
        let config = RegistryConfig {
            models: vec![ModelEntry {
                id: "kimi-k2".to_string(),
                display_name: "Kimi K2".to_string(),
                color: "#222222".to_string(),
            }],
            heuristics: vec![HeuristicEntry {
                pattern: "kimi".to_string(),
                target: "kimi-k2".to_string(),
            }],
            ..Default::default()
        };
        let registry = ModelRegistry::from_config(&config).unwrap();
        assert_eq!(registry.resolve_canonical_id("Kimi-K2-Instruct"), Some("kimi-k2"));
        // Built-in heuristics still come first.
        assert_eq!(registry.resolve_canonical_id("kimi-vs-qwen"), Some("qwen3-max"));
    }
}
