//! Faceted filtering over a category-scoped product list.
//!
//! [`FacetEngine`] pins a category view so that option sets and the filter
//! always see the same scoped products.

mod definition;
mod options;
mod predicate;
mod registry;
mod selection;
mod value;

pub use definition::{Extractor, FacetDefinition, FacetKind};
pub use options::options;
pub use predicate::{filter, include};
pub use registry::facets_for;
pub use selection::{FacetSelection, Selection};
pub use value::{FacetValue, Interval};

use tracing::debug;

use crate::catalog::Product;
use crate::scope::{scope, CategoryKey};

/// Options currently available for one facet.
#[derive(Debug, Clone)]
pub struct FacetOptions {
    pub facet: &'static FacetDefinition,
    pub values: Vec<FacetValue>,
}

/// A category view over a catalogue together with its facets.
#[derive(Debug, Clone)]
pub struct FacetEngine<'a> {
    category: CategoryKey,
    products: Vec<&'a Product>,
    facets: &'static [FacetDefinition],
}

impl<'a> FacetEngine<'a> {
    pub fn new(catalog: &'a [Product], category: CategoryKey) -> Self {
        Self {
            category,
            products: scope(catalog, category),
            facets: facets_for(category),
        }
    }

    pub fn category(&self) -> CategoryKey {
        self.category
    }

    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    pub fn facets(&self) -> &'static [FacetDefinition] {
        self.facets
    }

    pub fn facet(&self, id: &str) -> Option<&'static FacetDefinition> {
        self.facets.iter().find(|facet| facet.id == id)
    }

    /// Options for every facet of the category, including facets with none.
    pub fn facet_options(&self) -> Vec<FacetOptions> {
        self.facets
            .iter()
            .map(|facet| FacetOptions {
                facet,
                values: options(self.products.iter().copied(), facet),
            })
            .collect()
    }

    pub fn options_for(&self, id: &str) -> Option<Vec<FacetValue>> {
        self.facet(id)
            .map(|facet| options(self.products.iter().copied(), facet))
    }

    pub fn filter(&self, selection: &FacetSelection) -> Vec<&'a Product> {
        let matched = filter(self.products.iter().copied(), self.facets, selection);
        debug!(
            category = %self.category,
            scoped = self.products.len(),
            matched = matched.len(),
            "facet filter applied"
        );
        matched
    }
}
