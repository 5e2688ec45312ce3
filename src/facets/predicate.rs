use tracing::debug;

use super::definition::{Extractor, FacetDefinition};
use super::selection::{FacetSelection, Selection};
use crate::catalog::Product;

/// Whether `product` survives `selection`.
///
/// Facets combine with AND; values within a facet combine with OR. A facet
/// with an empty selection, or with no entry at all, is satisfied.
pub fn include(product: &Product, facets: &[FacetDefinition], selection: &FacetSelection) -> bool {
    facets.iter().all(|facet| match selection.get(facet.id) {
        Some(chosen) if !chosen.is_empty() => satisfies(product, facet, chosen),
        _ => true,
    })
}

/// Products passing `include`, in input order.
pub fn filter<'a, I>(products: I, facets: &[FacetDefinition], selection: &FacetSelection) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    for (facet, _) in selection.active() {
        if !facets.iter().any(|known| known.id == facet) {
            debug!(facet, "selection names an unknown facet; ignoring");
        }
    }

    products
        .into_iter()
        .filter(|product| include(product, facets, selection))
        .collect()
}

fn satisfies(product: &Product, facet: &FacetDefinition, chosen: &Selection) -> bool {
    match (facet.extractor, chosen) {
        (Extractor::Values(extract), Selection::Values(wanted)) => {
            extract(product).iter().any(|value| wanted.contains(value))
        }
        (Extractor::Values(extract), Selection::Single(wanted)) => extract(product).contains(wanted),
        (Extractor::Flag(flag), Selection::Flag(enabled)) => !enabled || flag(product),
        (Extractor::Interval(interval), Selection::Range(bounds)) => {
            interval(product).is_some_and(|own| own.overlaps(bounds))
        }
        (extractor, selection) => {
            debug!(
                facet = facet.id,
                ?extractor,
                ?selection,
                "selection does not fit facet kind; ignoring"
            );
            true
        }
    }
}
