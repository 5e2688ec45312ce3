use ppe_facets::catalog::{CatalogImporter, Product};
use ppe_facets::scope::{categorize, matches_category, scope, CategoryKey};

fn catalogue() -> Vec<Product> {
    let data = include_bytes!("fixtures/catalog.json");
    CatalogImporter::from_reader(&data[..]).expect("fixture catalogue parses")
}

#[test]
fn english_category_alone_places_the_visor_in_eye_face() {
    let mut products = catalogue();
    let visor = products
        .iter_mut()
        .find(|product| product.id.0 == "visor")
        .expect("visor present");
    assert!(matches_category(visor, CategoryKey::EyeFace));

    visor.sub_category_locales.it = None;
    assert!(matches_category(visor, CategoryKey::EyeFace));
}

#[test]
fn every_fixture_product_lands_in_its_views() {
    let products = catalogue();
    let expected: Vec<(&str, Vec<CategoryKey>)> = vec![
        ("glove-mech", vec![CategoryKey::Gloves, CategoryKey::MechanicalGloves]),
        ("glove-cut", vec![CategoryKey::Gloves, CategoryKey::MechanicalGloves]),
        ("glove-weld", vec![CategoryKey::Gloves, CategoryKey::ThermalGloves]),
        ("glove-chem", vec![CategoryKey::Gloves, CategoryKey::ChemicalGloves]),
        ("shoe-sb", vec![CategoryKey::Footwear]),
        ("shoe-s3", vec![CategoryKey::Footwear]),
        ("visor", vec![CategoryKey::EyeFace]),
        ("goggle", vec![CategoryKey::EyeFace]),
        ("helmet", vec![CategoryKey::Head]),
        ("earmuff", vec![CategoryKey::Hearing]),
        ("mask", vec![CategoryKey::Respiratory]),
        ("jacket", vec![CategoryKey::Clothing]),
    ];

    for (id, views) in expected {
        let product = products
            .iter()
            .find(|product| product.id.0 == id)
            .expect("fixture product present");
        assert_eq!(categorize(product), views, "{id}");
    }
}

#[test]
fn scope_keeps_catalogue_order_and_is_repeatable() {
    let products = catalogue();
    let first: Vec<&str> = scope(&products, CategoryKey::Gloves)
        .into_iter()
        .map(|product| product.id.0.as_str())
        .collect();
    let second: Vec<&str> = scope(&products, CategoryKey::Gloves)
        .into_iter()
        .map(|product| product.id.0.as_str())
        .collect();

    assert_eq!(first, vec!["glove-mech", "glove-cut", "glove-weld", "glove-chem"]);
    assert_eq!(first, second);
}
