//! Application orchestration.
//!
//! Owns the registry built from config and hands it to the dashboard view
//! for every command.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use arena_core::MonitorFeed;
use arena_dashboard::{DashboardSnapshot, DashboardView, ModelFilter, PositionFilter};
use arena_registry::{MatchStrategy, ModelRegistry, RegistryConfig, ResolvedIdentity};
use chrono::Utc;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// One line of `resolve` output.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveOutput {
    #[serde(flatten)]
    pub identity: ResolvedIdentity,
    pub canonical_id: Option<String>,
    pub strategy: Option<MatchStrategy>,
}

/// Filters for a snapshot, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SnapshotQuery {
    pub model: Option<String>,
    pub symbol: Option<String>,
    pub side: Option<String>,
}

impl SnapshotQuery {
    pub fn model_filter(&self) -> ModelFilter {
        ModelFilter::from(self.model.as_deref())
    }

    pub fn position_filter(&self) -> PositionFilter {
        PositionFilter::parse(
            self.model.as_deref().unwrap_or(""),
            self.symbol.as_deref().unwrap_or(""),
            self.side.as_deref().unwrap_or(""),
        )
    }
}

/// Main application.
pub struct Application {
    config: AppConfig,
    registry: ModelRegistry,
}

impl Application {
    /// Create a new application; fails on an invalid registry overlay.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let registry = ModelRegistry::from_config(&config.registry)?;

        info!(
            models = registry.len(),
            builtin = config.registry.include_builtin,
            overlay = !config.registry.is_builtin_only(),
            "Model registry ready"
        );

        Ok(Self { config, registry })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    fn view(&self) -> DashboardView<'_> {
        DashboardView::new(&self.registry, self.config.dashboard.clone())
    }

    /// Resolve each identifier, in input order.
    pub fn resolve_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<ResolveOutput> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                let resolution = self.registry.resolve(id);
                ResolveOutput {
                    identity: self.registry.model_meta(id),
                    canonical_id: resolution.map(|r| r.canonical_id.to_string()),
                    strategy: resolution.map(|r| r.strategy),
                }
            })
            .collect()
    }

    /// Build a snapshot from an already parsed feed.
    pub fn snapshot(&self, feed: &MonitorFeed, query: &SnapshotQuery) -> DashboardSnapshot {
        let view = self.view();
        let snapshot = view.collect_snapshot_at(
            feed,
            &query.model_filter(),
            &query.position_filter(),
            Utc::now(),
        );

        debug!(
            exchange = ?snapshot.exchange_id,
            model_filter = ?snapshot.model_filter,
            "Snapshot built"
        );

        snapshot
    }

    /// Build a snapshot from feed JSON text.
    pub fn snapshot_json(&self, raw: &str, query: &SnapshotQuery) -> AppResult<DashboardSnapshot> {
        let feed = MonitorFeed::from_json(raw)
            .map_err(|e| AppError::Input(format!("Failed to parse feed: {e}")))?;
        debug!(
            trades = feed.trades.len(),
            models = ?feed.model_ids(),
            "Feed parsed"
        );
        Ok(self.snapshot(&feed, query))
    }

    /// Build a snapshot from a feed file.
    pub fn snapshot_file(
        &self,
        path: impl AsRef<Path>,
        query: &SnapshotQuery,
    ) -> AppResult<DashboardSnapshot> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        info!(path = %path.display(), bytes = raw.len(), "Loaded feed");
        self.snapshot_json(&raw, query)
    }

    /// The effective registry, in config form.
    pub fn registry_dump(&self) -> RegistryConfig {
        self.registry.to_config()
    }

    /// Render command output as JSON.
    pub fn render<T: Serialize>(&self, value: &T, compact: bool) -> AppResult<String> {
        let out = if compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(out)
    }
}
