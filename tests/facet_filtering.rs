use ppe_facets::catalog::{CatalogImporter, Product};
use ppe_facets::facets::{include, FacetEngine, FacetSelection, FacetValue};
use ppe_facets::scope::CategoryKey;

fn catalogue() -> Vec<Product> {
    let data = include_bytes!("fixtures/catalog.json");
    CatalogImporter::from_reader(&data[..]).expect("fixture catalogue parses")
}

fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|product| product.id.0.as_str()).collect()
}

fn texts(values: &[&str]) -> Vec<FacetValue> {
    values.iter().map(|value| FacetValue::text(*value)).collect()
}

#[test]
fn footwear_class_selection_is_an_or_over_combined_classes() {
    let products = catalogue();
    let engine = FacetEngine::new(&products, CategoryKey::Footwear);

    let mut selection = FacetSelection::new();
    selection.toggle("safety_class", FacetValue::text("S1"));
    selection.toggle("safety_class", FacetValue::text("S3"));

    assert_eq!(ids(&engine.filter(&selection)), vec!["shoe-s3"]);
}

#[test]
fn size_range_keeps_overlapping_intervals_only() {
    let products = catalogue();
    let engine = FacetEngine::new(&products, CategoryKey::Footwear);

    let mut selection = FacetSelection::new();
    selection.set_min("size", Some(40.0));
    selection.set_max("size", Some(45.0));

    assert_eq!(ids(&engine.filter(&selection)), vec!["shoe-sb"]);
}

#[test]
fn footwear_options_reflect_the_fixture() {
    let products = catalogue();
    let engine = FacetEngine::new(&products, CategoryKey::Footwear);

    assert_eq!(
        engine.options_for("safety_class"),
        Some(texts(&["S3", "SB", "SRC"]))
    );
    assert_eq!(
        engine.options_for("size"),
        Some(vec![
            FacetValue::Number(44.0),
            FacetValue::Number(46.0),
            FacetValue::Number(47.0),
        ])
    );
    assert_eq!(engine.options_for("metal_free"), Some(vec![FacetValue::Flag(true)]));
}

#[test]
fn glove_hazard_facet_offers_earned_labels() {
    let products = catalogue();
    let engine = FacetEngine::new(&products, CategoryKey::Gloves);
    assert_eq!(engine.products().len(), 4);

    assert_eq!(
        engine.options_for("hazards"),
        Some(texts(&[
            "abrasion_protection",
            "general_mechanical",
            "heavy_duty_welding",
            "high_cut_risks",
            "light_duty_welding",
            "molten_metal",
            "puncture_protection",
        ]))
    );

    let mut selection = FacetSelection::new();
    selection.toggle("hazards", FacetValue::text("abrasion_protection"));
    assert_eq!(
        ids(&engine.filter(&selection)),
        vec!["glove-mech", "glove-cut", "glove-weld"]
    );

    selection.toggle("coatings", FacetValue::text("Nitrile"));
    assert_eq!(ids(&engine.filter(&selection)), vec!["glove-mech"]);
}

#[test]
fn coatings_or_agrees_with_every_or_some_across_the_catalogue() {
    let products = catalogue();
    let engine = FacetEngine::new(&products, CategoryKey::Gloves);
    let available: Vec<String> = engine
        .options_for("coatings")
        .expect("gloves expose coatings")
        .iter()
        .map(FacetValue::to_string)
        .collect();
    assert_eq!(available, vec!["Latex", "Nitrile", "PU"]);

    for mask in 1u32..(1 << available.len()) {
        let wanted: Vec<&str> = available
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, coating)| coating.as_str())
            .collect();

        let mut selection = FacetSelection::new();
        for coating in &wanted {
            selection.toggle("coatings", FacetValue::text(*coating));
        }

        for product in &products {
            let coatings: Vec<&str> = product
                .attributes
                .hand
                .as_ref()
                .map(|hand| hand.coatings.iter().map(String::as_str).collect())
                .unwrap_or_default();
            let every = wanted.iter().all(|w| coatings.contains(w));
            let some = wanted.iter().any(|w| coatings.contains(w));
            assert_eq!(
                include(product, engine.facets(), &selection),
                every || some,
                "{} with {wanted:?}",
                product.id.0
            );
        }
    }
}

#[test]
fn glove_sub_type_views_narrow_the_scope() {
    let products = catalogue();

    let thermal = FacetEngine::new(&products, CategoryKey::ThermalGloves);
    assert_eq!(ids(thermal.products()), vec!["glove-weld"]);

    let mechanical = FacetEngine::new(&products, CategoryKey::MechanicalGloves);
    assert_eq!(ids(mechanical.products()), vec!["glove-mech", "glove-cut"]);

    let chemical = FacetEngine::new(&products, CategoryKey::ChemicalGloves);
    assert_eq!(ids(chemical.products()), vec!["glove-chem"]);
}

#[test]
fn eye_face_markings_and_flags() {
    let products = catalogue();
    let engine = FacetEngine::new(&products, CategoryKey::EyeFace);

    assert_eq!(engine.options_for("en166_markings"), Some(texts(&["3", "4", "N"])));
    assert_eq!(engine.options_for("lens_tint"), Some(texts(&["Clear", "Smoke"])));
    assert_eq!(
        engine.options_for("optical_class"),
        Some(vec![FacetValue::Number(1.0), FacetValue::Number(2.0)])
    );

    let mut selection = FacetSelection::new();
    selection.set_flag("anti_fog", true);
    assert_eq!(ids(&engine.filter(&selection)), vec!["visor"]);

    selection.set_flag("anti_fog", false);
    selection.set_single("optical_class", FacetValue::Number(2.0));
    assert_eq!(ids(&engine.filter(&selection)), vec!["goggle"]);
}

#[test]
fn other_families_expose_their_facets() {
    let products = catalogue();

    let head = FacetEngine::new(&products, CategoryKey::Head);
    assert_eq!(head.options_for("en397_options"), Some(texts(&["-30°C", "LD"])));
    assert_eq!(
        head.options_for("electrical_insulation"),
        Some(vec![FacetValue::Flag(true)])
    );

    let hearing = FacetEngine::new(&products, CategoryKey::Hearing);
    let mut loud = FacetSelection::new();
    loud.set_range("snr", Some(30.0), None);
    assert_eq!(ids(&hearing.filter(&loud)), vec!["earmuff"]);

    let respiratory = FacetEngine::new(&products, CategoryKey::Respiratory);
    let mut reusable = FacetSelection::new();
    reusable.set_flag("reusable", true);
    assert!(respiratory.filter(&reusable).is_empty());
    assert_eq!(respiratory.options_for("protection_class"), Some(texts(&["FFP2"])));

    let clothing = FacetEngine::new(&products, CategoryKey::Clothing);
    assert_eq!(
        clothing.options_for("en11612_codes"),
        Some(texts(&["A1", "B1", "C1"]))
    );
}

#[test]
fn every_facet_gets_an_option_entry() {
    let products = catalogue();
    for key in CategoryKey::ALL {
        let engine = FacetEngine::new(&products, key);
        let options = engine.facet_options();
        assert_eq!(options.len(), engine.facets().len(), "{key}");
        for entry in options {
            let mut sorted = entry.values.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted, entry.values, "{key}/{}", entry.facet.id);
        }
    }
}
