//! Named hazard-protection classifications derived from standard markings.

mod condition;
mod registry;

pub use condition::{Condition, LeafOutcome};

use tracing::trace;

use crate::catalog::{LabelName, Locale, Product};
use crate::standards::StandardField;

/// A named classification and the rule that grants it.
#[derive(Debug)]
pub struct HazardLabel {
    pub id: &'static str,
    pub name: LabelName,
    pub description: &'static str,
    pub condition: Condition,
}

impl HazardLabel {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        self.name.get(locale)
    }

    pub fn applies_to(&self, product: &Product) -> bool {
        self.condition.evaluate(&product.safety_standards)
    }

    /// Fields the rule reads, deduplicated.
    pub fn referenced_fields(&self) -> Vec<StandardField> {
        let mut fields: Vec<StandardField> = self
            .condition
            .leaves()
            .into_iter()
            .filter_map(Condition::field)
            .collect();
        fields.sort();
        fields.dedup();
        fields
    }
}

/// Ordered, immutable set of hazard labels.
///
/// Labels are recomputed on every call; nothing is cached per product.
#[derive(Debug, Clone, Copy)]
pub struct HazardRegistry {
    labels: &'static [HazardLabel],
}

impl HazardRegistry {
    pub fn standard() -> Self {
        Self {
            labels: registry::STANDARD_LABELS,
        }
    }

    pub fn labels(&self) -> &'static [HazardLabel] {
        self.labels
    }

    pub fn find(&self, id: &str) -> Option<&'static HazardLabel> {
        self.labels.iter().find(|label| label.id == id)
    }

    /// Labels granted to `product`, in registry order.
    pub fn applicable_labels(&self, product: &Product) -> Vec<&'static HazardLabel> {
        let labels: Vec<&'static HazardLabel> = self
            .labels
            .iter()
            .filter(|label| label.applies_to(product))
            .collect();
        trace!(product_id = %product.id, count = labels.len(), "hazard labels evaluated");
        labels
    }

    /// Unknown ids never match.
    pub fn matches(&self, product: &Product, id: &str) -> bool {
        self.find(id)
            .map(|label| label.applies_to(product))
            .unwrap_or(false)
    }

    pub fn explain(&self, product: &Product, id: &str) -> Option<Vec<LeafOutcome>> {
        self.find(id)
            .map(|label| label.condition.explain(&product.safety_standards))
    }
}

impl Default for HazardRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Locales, ProductAttributes, ProductId};
    use crate::standards::{
        En388, En407, HandStandards, LetterGrade, PerformanceValue, SafetyStandards,
    };

    fn glove(en_388: Option<En388>, en_407: Option<En407>) -> Product {
        Product {
            id: ProductId("glove".to_string()),
            name: "Test glove".to_string(),
            brand: None,
            category: "Gloves".to_string(),
            sub_category: None,
            category_locales: Locales::default(),
            sub_category_locales: Locales::default(),
            safety_standards: SafetyStandards {
                hand: Some(HandStandards { en_388, en_407 }),
                ..SafetyStandards::default()
            },
            attributes: ProductAttributes::default(),
        }
    }

    fn en_388(abrasion: u8, cut: PerformanceValue, tear: u8, puncture: u8) -> En388 {
        En388 {
            abrasion: Some(PerformanceValue::Numeric(abrasion)),
            cut: Some(cut),
            tear: Some(PerformanceValue::Numeric(tear)),
            puncture: Some(PerformanceValue::Numeric(puncture)),
            iso_13997: None,
            impact: None,
        }
    }

    fn en_407(flame: u8, contact: u8, convective: u8, radiant: u8, small: u8, large: u8) -> En407 {
        En407 {
            limited_flame_spread: Some(PerformanceValue::Numeric(flame)),
            contact_heat: Some(PerformanceValue::Numeric(contact)),
            convective_heat: Some(PerformanceValue::Numeric(convective)),
            radiant_heat: Some(PerformanceValue::Numeric(radiant)),
            small_splashes_molten_metal: Some(PerformanceValue::Numeric(small)),
            large_quantities_molten_metal: Some(PerformanceValue::Numeric(large)),
        }
    }

    fn ids(product: &Product) -> Vec<&'static str> {
        HazardRegistry::standard()
            .applicable_labels(product)
            .into_iter()
            .map(|label| label.id)
            .collect()
    }

    #[test]
    fn registry_ids_are_unique_and_ordered() {
        let registry = HazardRegistry::standard();
        let ids: Vec<&str> = registry.labels().iter().map(|label| label.id).collect();
        assert_eq!(
            ids,
            vec![
                "general_mechanical",
                "high_cut_risks",
                "abrasion_protection",
                "puncture_protection",
                "impact_protection",
                "high_heat",
                "molten_metal",
                "light_duty_welding",
                "heavy_duty_welding",
            ]
        );
    }

    #[test]
    fn heavy_duty_welding_needs_both_blocks() {
        let product = glove(
            Some(en_388(2, PerformanceValue::Numeric(1), 2, 2)),
            Some(en_407(3, 1, 2, 1, 3, 0)),
        );
        let labels = ids(&product);
        assert!(labels.contains(&"heavy_duty_welding"));
        assert!(labels.contains(&"light_duty_welding"));
        assert!(labels.contains(&"molten_metal"));
        assert!(!labels.contains(&"high_heat"));

        let without_thermal = glove(Some(en_388(4, PerformanceValue::Numeric(5), 4, 4)), None);
        assert!(!HazardRegistry::standard().matches(&without_thermal, "heavy_duty_welding"));
    }

    #[test]
    fn heavy_duty_welding_rejects_low_convective_heat() {
        let product = glove(
            Some(en_388(2, PerformanceValue::Numeric(1), 2, 2)),
            Some(en_407(3, 1, 1, 1, 3, 0)),
        );
        let labels = ids(&product);
        assert!(!labels.contains(&"heavy_duty_welding"));
        assert!(labels.contains(&"light_duty_welding"));
    }

    #[test]
    fn high_heat_requires_all_four_fields() {
        let product = glove(None, Some(en_407(2, 2, 2, 2, 0, 0)));
        assert_eq!(ids(&product), vec!["high_heat"]);

        let product = glove(None, Some(en_407(2, 2, 2, 1, 0, 0)));
        assert!(ids(&product).is_empty());
    }

    #[test]
    fn letter_contact_heat_satisfies_numeric_threshold() {
        let mut thermal = en_407(2, 0, 2, 2, 0, 0);
        thermal.contact_heat = Some(PerformanceValue::Letter(LetterGrade::F));
        let product = glove(None, Some(thermal));
        assert!(HazardRegistry::standard().matches(&product, "high_heat"));
    }

    #[test]
    fn impact_label_reads_p_marking() {
        let mut block = en_388(1, PerformanceValue::Numeric(1), 1, 1);
        block.impact = Some(PerformanceValue::parse("P"));
        let product = glove(Some(block), None);
        assert!(HazardRegistry::standard().matches(&product, "impact_protection"));
    }

    #[test]
    fn unknown_label_never_matches() {
        let product = glove(Some(en_388(4, PerformanceValue::Numeric(5), 4, 4)), None);
        let registry = HazardRegistry::standard();
        assert!(!registry.matches(&product, "chainsaw"));
        assert!(registry.explain(&product, "chainsaw").is_none());
    }

    #[test]
    fn explain_lists_failing_leaves() {
        let product = glove(Some(en_388(3, PerformanceValue::Numeric(1), 2, 2)), None);
        let outcomes = HazardRegistry::standard()
            .explain(&product, "general_mechanical")
            .expect("label exists");

        let failing: Vec<StandardField> = outcomes
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.field)
            .collect();
        assert_eq!(
            failing,
            vec![StandardField::En388Cut, StandardField::Iso13997Cut]
        );
    }

    #[test]
    fn referenced_fields_are_deduplicated() {
        let registry = HazardRegistry::standard();
        let label = registry.find("general_mechanical").expect("label exists");
        assert_eq!(
            label.referenced_fields(),
            vec![
                StandardField::En388Abrasion,
                StandardField::En388Cut,
                StandardField::En388Tear,
                StandardField::En388Puncture,
                StandardField::Iso13997Cut,
            ]
        );
    }

    #[test]
    fn display_name_follows_locale() {
        let registry = HazardRegistry::standard();
        let label = registry.find("high_cut_risks").expect("label exists");
        assert_eq!(label.display_name(Locale::En), "High cut risks");
        assert_eq!(label.display_name(Locale::It), "Rischi di taglio elevati");
    }
}
