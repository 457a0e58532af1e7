use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartKind;

/// One legend row derived from a dataset or overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub title: String,
    pub chart_kind: ChartKind,
}

/// Legend rows keyed by tag, in first-insertion order.
///
/// Tags are the same strings carried on data points and overlay lines, so a
/// resolved touch can be cross-referenced back to its row for highlighting
/// without the legend owning any data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LegendRegistry {
    entries: IndexMap<String, LegendEntry>,
}

impl LegendRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a row under `tag`; the first registration of a tag wins.
    pub fn register(&mut self, tag: impl Into<String>, entry: LegendEntry) {
        self.entries.entry(tag.into()).or_insert(entry);
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&LegendEntry> {
        self.entries.get(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LegendEntry)> {
        self.entries.iter().map(|(tag, entry)| (tag.as_str(), entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
