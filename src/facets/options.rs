use std::collections::BTreeSet;

use super::definition::FacetDefinition;
use super::value::FacetValue;
use crate::catalog::Product;

/// Distinct values present in `products` for `facet`, sorted ascending.
///
/// Runs in a single pass. Blank text never becomes an option.
pub fn options<'a, I>(products: I, facet: &FacetDefinition) -> Vec<FacetValue>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut values = BTreeSet::new();
    for product in products {
        values.extend(
            facet
                .values(product)
                .into_iter()
                .filter(FacetValue::is_selectable),
        );
    }
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FootwearAttributes, Locales, ProductAttributes, ProductId};
    use crate::facets::registry::facets_for;
    use crate::scope::CategoryKey;
    use crate::standards::{EnIso20345, FootwearStandards, SafetyStandards};

    fn shoe(id: &str, class: &str, size: (Option<f64>, Option<f64>), metal_free: bool) -> Product {
        Product {
            id: ProductId(id.to_string()),
            name: id.to_string(),
            brand: None,
            category: "Safety Footwear".to_string(),
            sub_category: None,
            category_locales: Locales::default(),
            sub_category_locales: Locales::default(),
            safety_standards: SafetyStandards {
                footwear: Some(FootwearStandards {
                    en_iso_20345: Some(EnIso20345 {
                        safety_class: Some(class.to_string()),
                        markings: Vec::new(),
                        slip_resistance: None,
                    }),
                }),
                ..SafetyStandards::default()
            },
            attributes: ProductAttributes {
                footwear: Some(FootwearAttributes {
                    size_min: size.0,
                    size_max: size.1,
                    toe_cap: None,
                    metal_free,
                }),
                ..ProductAttributes::default()
            },
        }
    }

    fn facet(id: &str) -> &'static FacetDefinition {
        facets_for(CategoryKey::Footwear)
            .iter()
            .find(|facet| facet.id == id)
            .expect("footwear facet exists")
    }

    #[test]
    fn options_are_distinct_and_sorted() {
        let products = vec![
            shoe("a", "S3", (None, None), false),
            shoe("b", "S1", (None, None), false),
            shoe("c", "S3", (None, None), false),
            shoe("d", " ", (None, None), false),
        ];
        assert_eq!(
            options(&products, facet("safety_class")),
            vec![FacetValue::text("S1"), FacetValue::text("S3")]
        );
    }

    #[test]
    fn flag_facets_offer_true_only_when_someone_has_it() {
        let none = vec![shoe("a", "S1", (None, None), false)];
        assert!(options(&none, facet("metal_free")).is_empty());

        let some = vec![
            shoe("a", "S1", (None, None), false),
            shoe("b", "S1", (None, None), true),
        ];
        assert_eq!(options(&some, facet("metal_free")), vec![FacetValue::Flag(true)]);
    }

    #[test]
    fn range_facets_offer_endpoints() {
        let products = vec![
            shoe("a", "S1", (Some(38.0), Some(46.0)), false),
            shoe("b", "S1", (Some(40.0), None), false),
        ];
        assert_eq!(
            options(&products, facet("size")),
            vec![
                FacetValue::Number(38.0),
                FacetValue::Number(40.0),
                FacetValue::Number(46.0),
            ]
        );
    }

    #[test]
    fn empty_scope_has_no_options() {
        let products: Vec<Product> = Vec::new();
        assert!(options(&products, facet("safety_class")).is_empty());
    }
}
