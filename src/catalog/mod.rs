mod product;

pub use product::{
    ClothingAttributes, EyeFaceAttributes, FootwearAttributes, HandAttributes, HeadAttributes,
    HearingAttributes, LabelName, Locale, Locales, Product, ProductAttributes, ProductId,
    RespiratoryAttributes,
};

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

/// Failure while reading a catalogue export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalogue: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads a JSON array of products exported by the catalogue service.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<Product> = serde_json::from_reader(reader)?;

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                warn!(product_id = %product.id, "duplicate product id in catalogue");
            }
        }

        info!(count = products.len(), "catalogue loaded");
        Ok(products)
    }
}
