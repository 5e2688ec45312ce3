use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::value::{FacetValue, Interval};

/// What the user picked for one facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Selection {
    Values(BTreeSet<FacetValue>),
    Single(FacetValue),
    Flag(bool),
    Range(Interval),
}

impl Selection {
    /// An empty selection imposes no constraint.
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Values(values) => values.is_empty(),
            Selection::Single(_) => false,
            Selection::Flag(enabled) => !enabled,
            Selection::Range(bounds) => bounds.is_unbounded(),
        }
    }
}

/// Live filter state for one category page, keyed by facet id.
///
/// Every mutation succeeds from every state. Writing a different kind of
/// selection to a facet replaces whatever was there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetSelection {
    entries: BTreeMap<String, Selection>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to a multi-select facet, or removes it if present.
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, facet: &str, value: FacetValue) -> bool {
        let entry = self
            .entries
            .entry(facet.to_string())
            .or_insert_with(|| Selection::Values(BTreeSet::new()));
        if !matches!(entry, Selection::Values(_)) {
            *entry = Selection::Values(BTreeSet::new());
        }
        let Selection::Values(values) = entry else {
            return false;
        };

        if values.remove(&value) {
            false
        } else {
            values.insert(value);
            true
        }
    }

    pub fn set_single(&mut self, facet: &str, value: FacetValue) {
        self.entries
            .insert(facet.to_string(), Selection::Single(value));
    }

    pub fn set_flag(&mut self, facet: &str, enabled: bool) {
        self.entries
            .insert(facet.to_string(), Selection::Flag(enabled));
    }

    pub fn set_min(&mut self, facet: &str, min: Option<f64>) {
        let mut bounds = self.range(facet);
        bounds.min = min;
        self.entries
            .insert(facet.to_string(), Selection::Range(bounds));
    }

    pub fn set_max(&mut self, facet: &str, max: Option<f64>) {
        let mut bounds = self.range(facet);
        bounds.max = max;
        self.entries
            .insert(facet.to_string(), Selection::Range(bounds));
    }

    pub fn set_range(&mut self, facet: &str, min: Option<f64>, max: Option<f64>) {
        self.entries
            .insert(facet.to_string(), Selection::Range(Interval::new(min, max)));
    }

    pub fn clear(&mut self, facet: &str) {
        self.entries.remove(facet);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, facet: &str) -> Option<&Selection> {
        self.entries.get(facet)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Selection::is_empty)
    }

    /// Facets carrying a constraint, in id order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.entries
            .iter()
            .filter(|(_, selection)| !selection.is_empty())
            .map(|(facet, selection)| (facet.as_str(), selection))
    }

    fn range(&self, facet: &str) -> Interval {
        match self.entries.get(facet) {
            Some(Selection::Range(bounds)) => *bounds,
            _ => Interval::default(),
        }
    }
}
