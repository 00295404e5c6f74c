//! Identity assembly for presentation code.

use serde::{Deserialize, Serialize};

use crate::color::BrandColor;
use crate::registry::{ModelRecord, ModelRegistry};

/// Display record handed to views.
///
/// `id` is the caller's own identifier, not necessarily the canonical one:
/// views keep indexing rows by what the upstream sent while label and color
/// are canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    pub id: String,
    pub display_name: String,
    pub color: BrandColor,
}

impl ResolvedIdentity {
    fn from_record(record: &ModelRecord, id: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: record.display_name.clone(),
            color: record.color.clone(),
        }
    }
}

impl From<&ModelRecord> for ResolvedIdentity {
    fn from(record: &ModelRecord) -> Self {
        Self::from_record(record, &record.id)
    }
}

impl ModelRegistry {
    /// Resolve `input` into a display record. Never fails.
    ///
    /// Unresolvable input is shown as-is in the neutral color.
    pub fn model_meta(&self, input: &str) -> ResolvedIdentity {
        if let Some(record) = self.get(input) {
            return ResolvedIdentity::from(record);
        }

        match self.resolve_canonical_id(input).and_then(|id| self.get(id)) {
            Some(record) => ResolvedIdentity::from_record(record, input),
            None => ResolvedIdentity {
                id: input.to_string(),
                display_name: input.to_string(),
                color: self.default_color.clone(),
            },
        }
    }

    /// Display name for `input`.
    pub fn model_name(&self, input: &str) -> String {
        self.model_meta(input).display_name
    }

    /// Brand color for `input`.
    pub fn model_color(&self, input: &str) -> BrandColor {
        self.model_meta(input).color
    }
}
