//! Row filters driven by query-string style values ("ALL", model id, ...).

use arena_core::{PositionRecord, TradeSide};
use serde::Serialize;

const ALL: &str = "all";

fn wildcard(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL)
}

/// Filter on the raw model id, case-insensitive.
///
/// Compares upstream ids as sent, not resolved identities: two ids that
/// resolve to the same model stay distinct options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelFilter(Option<String>);

impl ModelFilter {
    /// No filtering.
    pub fn all() -> Self {
        Self(None)
    }

    /// Parse a filter value; empty or "ALL" (any case) means no filtering.
    pub fn parse(value: &str) -> Self {
        if wildcard(value) {
            Self::all()
        } else {
            Self(Some(value.trim().to_lowercase()))
        }
    }

    pub fn is_all(&self) -> bool {
        self.0.is_none()
    }

    /// The selected model id (lower-cased), if any.
    pub fn selected(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn matches(&self, model_id: &str) -> bool {
        match &self.0 {
            None => true,
            Some(want) => model_id.to_lowercase() == *want,
        }
    }
}

impl From<Option<&str>> for ModelFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }
}

/// Position side filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SideFilter {
    #[default]
    All,
    Long,
    Short,
}

impl SideFilter {
    /// Unknown values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "long" => Self::Long,
            "short" => Self::Short,
            _ => Self::All,
        }
    }

    pub fn matches(&self, side: TradeSide) -> bool {
        match self {
            Self::All => true,
            Self::Long => side.is_long(),
            Self::Short => side.is_short(),
        }
    }
}

/// Combined model / symbol / side filter for open positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PositionFilter {
    pub model: ModelFilter,
    /// Upper-cased symbol, `None` = all.
    pub symbol: Option<String>,
    pub side: SideFilter,
}

impl PositionFilter {
    pub fn parse(model: &str, symbol: &str, side: &str) -> Self {
        Self {
            model: ModelFilter::parse(model),
            symbol: (!wildcard(symbol)).then(|| symbol.trim().to_uppercase()),
            side: SideFilter::parse(side),
        }
    }

    pub fn matches(&self, position: &PositionRecord) -> bool {
        let model_ok = self
            .model
            .matches(position.model_id.as_deref().unwrap_or(""));
        let symbol_ok = match &self.symbol {
            None => true,
            Some(want) => position
                .symbol
                .as_deref()
                .map(|s| s.to_uppercase() == *want)
                .unwrap_or(false),
        };
        model_ok && symbol_ok && self.side.matches(position.side)
    }
}
