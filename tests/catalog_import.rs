use std::collections::HashSet;
use std::path::PathBuf;

use ppe_facets::catalog::CatalogImporter;
use ppe_facets::standards::PerformanceValue;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

#[test]
fn fixture_loads_from_disk() {
    let products = CatalogImporter::from_path(fixture_path()).expect("fixture loads");
    assert_eq!(products.len(), 12);

    let ids: HashSet<&str> = products.iter().map(|product| product.id.0.as_str()).collect();
    assert_eq!(ids.len(), products.len());
}

#[test]
fn marking_tokens_are_normalised_on_import() {
    let products = CatalogImporter::from_path(fixture_path()).expect("fixture loads");
    let glove = products
        .iter()
        .find(|product| product.id.0 == "glove-cut")
        .expect("cut glove present");
    let en_388 = glove
        .safety_standards
        .hand
        .as_ref()
        .and_then(|hand| hand.en_388.as_ref())
        .expect("EN 388 block present");

    assert_eq!(en_388.cut, Some(PerformanceValue::Untested));
    assert_eq!(en_388.abrasion, Some(PerformanceValue::Numeric(4)));
    assert_eq!(en_388.iso_13997, Some(PerformanceValue::parse("D")));
    assert_eq!(en_388.impact, None);
}

#[test]
fn imported_products_serialise_back_to_json() {
    let products = CatalogImporter::from_path(fixture_path()).expect("fixture loads");
    let json = serde_json::to_string(&products).expect("products serialise");
    let again = CatalogImporter::from_reader(json.as_bytes()).expect("round trip parses");
    assert_eq!(again, products);
}
