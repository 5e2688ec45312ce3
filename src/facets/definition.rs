use std::fmt;

use serde::Serialize;

use super::value::{FacetValue, Interval};
use crate::catalog::{LabelName, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    Boolean,
    SingleSelect,
    MultiSelect,
    NumericRange,
}

impl FacetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FacetKind::Boolean => "boolean",
            FacetKind::SingleSelect => "single_select",
            FacetKind::MultiSelect => "multi_select",
            FacetKind::NumericRange => "numeric_range",
        }
    }
}

/// How a facet reads its value(s) off a product.
#[derive(Clone, Copy)]
pub enum Extractor {
    Values(fn(&Product) -> Vec<FacetValue>),
    Flag(fn(&Product) -> bool),
    Interval(fn(&Product) -> Option<Interval>),
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extractor::Values(_) => f.write_str("Extractor::Values"),
            Extractor::Flag(_) => f.write_str("Extractor::Flag"),
            Extractor::Interval(_) => f.write_str("Extractor::Interval"),
        }
    }
}

/// One filter dimension offered for a category.
#[derive(Debug, Clone, Copy)]
pub struct FacetDefinition {
    pub id: &'static str,
    pub label: LabelName,
    pub kind: FacetKind,
    pub extractor: Extractor,
}

impl FacetDefinition {
    pub const fn multi_select(
        id: &'static str,
        label: LabelName,
        extract: fn(&Product) -> Vec<FacetValue>,
    ) -> Self {
        Self {
            id,
            label,
            kind: FacetKind::MultiSelect,
            extractor: Extractor::Values(extract),
        }
    }

    pub const fn single_select(
        id: &'static str,
        label: LabelName,
        extract: fn(&Product) -> Vec<FacetValue>,
    ) -> Self {
        Self {
            id,
            label,
            kind: FacetKind::SingleSelect,
            extractor: Extractor::Values(extract),
        }
    }

    pub const fn boolean(id: &'static str, label: LabelName, flag: fn(&Product) -> bool) -> Self {
        Self {
            id,
            label,
            kind: FacetKind::Boolean,
            extractor: Extractor::Flag(flag),
        }
    }

    pub const fn range(
        id: &'static str,
        label: LabelName,
        interval: fn(&Product) -> Option<Interval>,
    ) -> Self {
        Self {
            id,
            label,
            kind: FacetKind::NumericRange,
            extractor: Extractor::Interval(interval),
        }
    }

    /// Values the product contributes to this facet's option set.
    pub fn values(&self, product: &Product) -> Vec<FacetValue> {
        match self.extractor {
            Extractor::Values(extract) => extract(product),
            Extractor::Flag(flag) => {
                if flag(product) {
                    vec![FacetValue::Flag(true)]
                } else {
                    Vec::new()
                }
            }
            Extractor::Interval(interval) => interval(product)
                .map(|interval| interval.endpoints())
                .unwrap_or_default(),
        }
    }
}
