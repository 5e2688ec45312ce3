//! Static facet lists per category view and the extractors behind them.

use super::definition::FacetDefinition;
use super::value::{FacetValue, Interval};
use crate::catalog::{LabelName, Product};
use crate::hazard::HazardRegistry;
use crate::scope::CategoryKey;
use crate::standards::{meets, PerformanceValue, StandardField};

static EYE_FACE_FACETS: &[FacetDefinition] = &[
    FacetDefinition::multi_select(
        "lens_tint",
        LabelName::new("Lens tint", "Colore lente"),
        lens_tints,
    ),
    FacetDefinition::multi_select(
        "frame_style",
        LabelName::new("Frame style", "Tipo di montatura"),
        frame_style,
    ),
    FacetDefinition::multi_select(
        "en166_markings",
        LabelName::new("EN 166 markings", "Marcature EN 166"),
        en166_markings,
    ),
    FacetDefinition::single_select(
        "optical_class",
        LabelName::new("Optical class", "Classe ottica"),
        optical_class,
    ),
    FacetDefinition::boolean("anti_fog", LabelName::new("Anti-fog", "Antiappannamento"), anti_fog),
];

static FOOTWEAR_FACETS: &[FacetDefinition] = &[
    FacetDefinition::multi_select(
        "safety_class",
        LabelName::new("Safety class", "Classe di sicurezza"),
        footwear_classes,
    ),
    FacetDefinition::multi_select(
        "slip_resistance",
        LabelName::new("Slip resistance", "Resistenza allo scivolamento"),
        slip_resistance,
    ),
    FacetDefinition::multi_select("toe_cap", LabelName::new("Toe cap", "Puntale"), toe_cap),
    FacetDefinition::range("size", LabelName::new("Size", "Taglia"), footwear_size),
    FacetDefinition::boolean("metal_free", LabelName::new("Metal free", "Senza metallo"), metal_free),
];

static HEAD_FACETS: &[FacetDefinition] = &[
    FacetDefinition::multi_select(
        "helmet_type",
        LabelName::new("Helmet type", "Tipo di elmetto"),
        helmet_type,
    ),
    FacetDefinition::multi_select(
        "en397_options",
        LabelName::new("EN 397 options", "Requisiti opzionali EN 397"),
        en397_options,
    ),
    FacetDefinition::boolean(
        "electrical_insulation",
        LabelName::new("Electrically insulating (EN 50365)", "Isolante elettrico (EN 50365)"),
        electrically_insulating,
    ),
];

static HEARING_FACETS: &[FacetDefinition] = &[
    FacetDefinition::multi_select(
        "hearing_type",
        LabelName::new("Protector type", "Tipo di protettore"),
        hearing_type,
    ),
    FacetDefinition::range("snr", LabelName::new("SNR (dB)", "SNR (dB)"), snr),
    FacetDefinition::boolean("reusable", LabelName::new("Reusable", "Riutilizzabile"), hearing_reusable),
];

static RESPIRATORY_FACETS: &[FacetDefinition] = &[
    FacetDefinition::multi_select(
        "protection_class",
        LabelName::new("Protection class", "Classe di protezione"),
        protection_class,
    ),
    FacetDefinition::boolean("valve", LabelName::new("Exhalation valve", "Valvola"), valve),
    FacetDefinition::boolean("reusable", LabelName::new("Reusable", "Riutilizzabile"), mask_reusable),
];

static CLOTHING_FACETS: &[FacetDefinition] = &[
    FacetDefinition::multi_select(
        "en11612_codes",
        LabelName::new("EN ISO 11612 codes", "Codici EN ISO 11612"),
        en11612_codes,
    ),
    FacetDefinition::multi_select(
        "garment_type",
        LabelName::new("Garment type", "Tipo di capo"),
        garment_type,
    ),
    FacetDefinition::boolean(
        "high_visibility",
        LabelName::new("High visibility", "Alta visibilità"),
        high_visibility,
    ),
];

static GLOVE_FACETS: &[FacetDefinition] = &[
    FacetDefinition::multi_select("hazards", LabelName::new("Hazards", "Rischi"), hazard_labels),
    FacetDefinition::multi_select("coatings", LabelName::new("Coating", "Rivestimento"), coatings),
    FacetDefinition::multi_select("material", LabelName::new("Material", "Materiale"), materials),
    FacetDefinition::range("size", LabelName::new("Size", "Taglia"), glove_size),
    FacetDefinition::boolean(
        "touchscreen",
        LabelName::new("Touchscreen compatible", "Compatibile touchscreen"),
        touchscreen,
    ),
];

/// Facets offered on a category view. Every glove sub-type shares one list.
pub fn facets_for(key: CategoryKey) -> &'static [FacetDefinition] {
    match key {
        CategoryKey::EyeFace => EYE_FACE_FACETS,
        CategoryKey::Footwear => FOOTWEAR_FACETS,
        CategoryKey::Head => HEAD_FACETS,
        CategoryKey::Hearing => HEARING_FACETS,
        CategoryKey::Respiratory => RESPIRATORY_FACETS,
        CategoryKey::Clothing => CLOTHING_FACETS,
        CategoryKey::Gloves
        | CategoryKey::MechanicalGloves
        | CategoryKey::ThermalGloves
        | CategoryKey::ChemicalGloves => GLOVE_FACETS,
    }
}

fn texts<'a>(values: impl IntoIterator<Item = &'a String>) -> Vec<FacetValue> {
    values
        .into_iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(FacetValue::text)
        .collect()
}

/// Whether a pass/fail marking is declared and passed.
fn marked(product: &Product, field: StandardField) -> bool {
    field
        .lookup(&product.safety_standards)
        .value()
        .is_some_and(|value| meets(field, value, PerformanceValue::Boolean(true)))
}

fn marking_codes(product: &Product, fields: &[StandardField]) -> Vec<FacetValue> {
    fields
        .iter()
        .filter(|field| marked(product, **field))
        .map(|field| FacetValue::text(field.code()))
        .collect()
}

/// Declared numeric level, if it is valid for the field.
fn level(product: &Product, field: StandardField) -> Option<u8> {
    match field.lookup(&product.safety_standards).value()? {
        value @ PerformanceValue::Numeric(level) if meets(field, value, PerformanceValue::Numeric(0)) => {
            Some(level)
        }
        _ => None,
    }
}

fn size_interval(min: Option<f64>, max: Option<f64>) -> Option<Interval> {
    let interval = Interval::new(min, max);
    (!interval.is_unbounded()).then_some(interval)
}

// Eye and face

fn lens_tints(product: &Product) -> Vec<FacetValue> {
    product
        .attributes
        .eye_face
        .as_ref()
        .map(|eye_face| texts(&eye_face.lens_tints))
        .unwrap_or_default()
}

fn frame_style(product: &Product) -> Vec<FacetValue> {
    texts(
        product
            .attributes
            .eye_face
            .as_ref()
            .and_then(|eye_face| eye_face.frame_style.as_ref()),
    )
}

const EN166_MARKINGS: &[StandardField] = &[
    StandardField::En166LiquidDroplets,
    StandardField::En166LargeDust,
    StandardField::En166GasFineDust,
    StandardField::En166ShortCircuitArc,
    StandardField::En166MoltenMetal,
    StandardField::En166SurfaceDamage,
    StandardField::En166AntiFog,
    StandardField::En166ExtremeTemperature,
];

fn en166_markings(product: &Product) -> Vec<FacetValue> {
    marking_codes(product, EN166_MARKINGS)
}

fn optical_class(product: &Product) -> Vec<FacetValue> {
    level(product, StandardField::En166OpticalClass)
        .filter(|class| *class > 0)
        .map(|class| FacetValue::Number(f64::from(class)))
        .into_iter()
        .collect()
}

fn anti_fog(product: &Product) -> bool {
    marked(product, StandardField::En166AntiFog)
}

// Footwear

fn footwear_classes(product: &Product) -> Vec<FacetValue> {
    product
        .safety_standards
        .footwear
        .as_ref()
        .and_then(|footwear| footwear.en_iso_20345.as_ref())
        .map(|block| {
            block
                .combined_classes()
                .into_iter()
                .map(FacetValue::Text)
                .collect()
        })
        .unwrap_or_default()
}

fn slip_resistance(product: &Product) -> Vec<FacetValue> {
    texts(
        product
            .safety_standards
            .footwear
            .as_ref()
            .and_then(|footwear| footwear.en_iso_20345.as_ref())
            .and_then(|block| block.slip_resistance.as_ref()),
    )
}

fn toe_cap(product: &Product) -> Vec<FacetValue> {
    texts(
        product
            .attributes
            .footwear
            .as_ref()
            .and_then(|footwear| footwear.toe_cap.as_ref()),
    )
}

fn footwear_size(product: &Product) -> Option<Interval> {
    let footwear = product.attributes.footwear.as_ref()?;
    size_interval(footwear.size_min, footwear.size_max)
}

fn metal_free(product: &Product) -> bool {
    product
        .attributes
        .footwear
        .as_ref()
        .is_some_and(|footwear| footwear.metal_free)
}

// Head

fn helmet_type(product: &Product) -> Vec<FacetValue> {
    texts(
        product
            .attributes
            .head
            .as_ref()
            .and_then(|head| head.helmet_type.as_ref()),
    )
}

const EN397_OPTIONS: &[StandardField] = &[
    StandardField::En397LowTemperature,
    StandardField::En397VeryHighTemperature,
    StandardField::En397ElectricalInsulation,
    StandardField::En397LateralDeformation,
    StandardField::En397MoltenMetal,
];

fn en397_options(product: &Product) -> Vec<FacetValue> {
    marking_codes(product, EN397_OPTIONS)
}

fn electrically_insulating(product: &Product) -> bool {
    product
        .safety_standards
        .head
        .as_ref()
        .is_some_and(|head| head.en_50365.is_some())
}

// Hearing

fn hearing_type(product: &Product) -> Vec<FacetValue> {
    texts(
        product
            .attributes
            .hearing
            .as_ref()
            .and_then(|hearing| hearing.hearing_type.as_ref()),
    )
}

fn snr(product: &Product) -> Option<Interval> {
    let snr = product
        .safety_standards
        .hearing
        .as_ref()?
        .en_352
        .as_ref()?
        .snr?;
    snr.is_finite().then(|| Interval::point(snr))
}

fn hearing_reusable(product: &Product) -> bool {
    product
        .attributes
        .hearing
        .as_ref()
        .is_some_and(|hearing| hearing.reusable)
}

// Respiratory

fn protection_class(product: &Product) -> Vec<FacetValue> {
    texts(
        product
            .safety_standards
            .respiratory
            .as_ref()
            .and_then(|respiratory| respiratory.en_149.as_ref())
            .and_then(|block| block.protection_class.as_ref()),
    )
}

fn valve(product: &Product) -> bool {
    product
        .attributes
        .respiratory
        .as_ref()
        .is_some_and(|respiratory| respiratory.valve)
}

fn mask_reusable(product: &Product) -> bool {
    product
        .safety_standards
        .respiratory
        .as_ref()
        .and_then(|respiratory| respiratory.en_149.as_ref())
        .and_then(|block| block.reusable)
        .unwrap_or(false)
}

// Clothing

const EN11612_LEVELLED: &[StandardField] = &[
    StandardField::En11612ConvectiveHeat,
    StandardField::En11612RadiantHeat,
    StandardField::En11612MoltenAluminium,
    StandardField::En11612MoltenIron,
    StandardField::En11612ContactHeat,
];

/// Flame spread codes as declared, then `B1`..`F3` style level codes.
fn en11612_codes(product: &Product) -> Vec<FacetValue> {
    let Some(block) = product
        .safety_standards
        .clothing
        .as_ref()
        .and_then(|clothing| clothing.en_iso_11612.as_ref())
    else {
        return Vec::new();
    };

    let mut codes = texts(&block.limited_flame_spread);
    codes.extend(EN11612_LEVELLED.iter().filter_map(|field| {
        level(product, *field)
            .filter(|level| *level > 0)
            .map(|level| FacetValue::Text(format!("{}{level}", field.code())))
    }));
    codes
}

fn garment_type(product: &Product) -> Vec<FacetValue> {
    texts(
        product
            .attributes
            .clothing
            .as_ref()
            .and_then(|clothing| clothing.garment_type.as_ref()),
    )
}

fn high_visibility(product: &Product) -> bool {
    product
        .attributes
        .clothing
        .as_ref()
        .is_some_and(|clothing| clothing.high_visibility)
}

// Gloves

fn hazard_labels(product: &Product) -> Vec<FacetValue> {
    HazardRegistry::standard()
        .applicable_labels(product)
        .into_iter()
        .map(|label| FacetValue::text(label.id))
        .collect()
}

fn coatings(product: &Product) -> Vec<FacetValue> {
    product
        .attributes
        .hand
        .as_ref()
        .map(|hand| texts(&hand.coatings))
        .unwrap_or_default()
}

fn materials(product: &Product) -> Vec<FacetValue> {
    product
        .attributes
        .hand
        .as_ref()
        .map(|hand| texts(&hand.materials))
        .unwrap_or_default()
}

fn glove_size(product: &Product) -> Option<Interval> {
    let hand = product.attributes.hand.as_ref()?;
    size_interval(hand.size_min, hand.size_max)
}

fn touchscreen(product: &Product) -> bool {
    product
        .attributes
        .hand
        .as_ref()
        .is_some_and(|hand| hand.touchscreen)
}
