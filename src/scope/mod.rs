//! Keyword classifier that buckets catalogue products into category views.
//!
//! Upstream records carry free-text category names rather than a category
//! enum, so membership is decided by substring matches against the English
//! and Italian keyword tables in [`keywords`]. Views overlap: a visor may land
//! in both eye-face and head.

pub mod keywords;
mod normalizer;

pub use keywords::{KeywordSet, KEYWORD_TABLE_REVISION};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;
use normalizer::normalize_text;

/// Category views offered by the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKey {
    EyeFace,
    Footwear,
    Head,
    Hearing,
    Respiratory,
    Clothing,
    Gloves,
    MechanicalGloves,
    ThermalGloves,
    ChemicalGloves,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 10] = [
        CategoryKey::EyeFace,
        CategoryKey::Footwear,
        CategoryKey::Head,
        CategoryKey::Hearing,
        CategoryKey::Respiratory,
        CategoryKey::Clothing,
        CategoryKey::Gloves,
        CategoryKey::MechanicalGloves,
        CategoryKey::ThermalGloves,
        CategoryKey::ChemicalGloves,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            CategoryKey::EyeFace => "eye-face",
            CategoryKey::Footwear => "footwear",
            CategoryKey::Head => "head",
            CategoryKey::Hearing => "hearing",
            CategoryKey::Respiratory => "respiratory",
            CategoryKey::Clothing => "clothing",
            CategoryKey::Gloves => "gloves",
            CategoryKey::MechanicalGloves => "mechanical-gloves",
            CategoryKey::ThermalGloves => "thermal-gloves",
            CategoryKey::ChemicalGloves => "chemical-gloves",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|key| key.slug() == wanted)
    }

    /// Glove sub-types share the glove facets.
    pub const fn is_glove(self) -> bool {
        matches!(
            self,
            CategoryKey::Gloves
                | CategoryKey::MechanicalGloves
                | CategoryKey::ThermalGloves
                | CategoryKey::ChemicalGloves
        )
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Whether the product's category text places it in `key`.
pub fn matches_category(product: &Product, key: CategoryKey) -> bool {
    let texts: Vec<String> = product.category_texts().map(normalize_text).collect();
    keywords::requirements(key)
        .iter()
        .all(|set| texts.iter().any(|text| set.matches(text)))
}

/// Products belonging to `key`, in catalogue order.
pub fn scope(products: &[Product], key: CategoryKey) -> Vec<&Product> {
    let scoped: Vec<&Product> = products
        .iter()
        .filter(|product| matches_category(product, key))
        .collect();
    debug!(category = %key, total = products.len(), scoped = scoped.len(), "category scoped");
    scoped
}

/// Every category view the product appears in.
pub fn categorize(product: &Product) -> Vec<CategoryKey> {
    CategoryKey::ALL
        .into_iter()
        .filter(|key| matches_category(product, *key))
        .collect()
}
