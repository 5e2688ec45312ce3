use std::fmt;

use serde::{Deserialize, Serialize};

use crate::standards::SafetyStandards;

/// Identifier wrapper for catalogue products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// English and Italian variants of a catalogue string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locales {
    pub en: Option<String>,
    pub it: Option<String>,
}

/// Display language for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    It,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "en-gb" | "en-us" | "english" => Some(Self::En),
            "it" | "it-it" | "italian" | "italiano" => Some(Self::It),
            _ => None,
        }
    }
}

/// Static English and Italian display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelName {
    pub en: &'static str,
    pub it: &'static str,
}

impl LabelName {
    pub const fn new(en: &'static str, it: &'static str) -> Self {
        Self { en, it }
    }

    pub const fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::It => self.it,
        }
    }
}

/// A translated product record as supplied by the catalogue service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub category_locales: Locales,
    #[serde(default)]
    pub sub_category_locales: Locales,
    #[serde(default)]
    pub safety_standards: SafetyStandards,
    #[serde(default)]
    pub attributes: ProductAttributes,
}

impl Product {
    /// Every category string the product carries, in any locale.
    pub fn category_texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.category.as_str())
            .chain(self.sub_category.as_deref())
            .chain(self.category_locales.en.as_deref())
            .chain(self.category_locales.it.as_deref())
            .chain(self.sub_category_locales.en.as_deref())
            .chain(self.sub_category_locales.it.as_deref())
    }
}

/// Family-specific descriptive attributes used by facets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<HandAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_face: Option<EyeFaceAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<HeadAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hearing: Option<HearingAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footwear: Option<FootwearAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clothing: Option<ClothingAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respiratory: Option<RespiratoryAttributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandAttributes {
    pub coatings: Vec<String>,
    pub materials: Vec<String>,
    pub size_min: Option<f64>,
    pub size_max: Option<f64>,
    pub touchscreen: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeFaceAttributes {
    pub lens_tints: Vec<String>,
    pub frame_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadAttributes {
    pub helmet_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HearingAttributes {
    pub hearing_type: Option<String>,
    pub reusable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootwearAttributes {
    pub size_min: Option<f64>,
    pub size_max: Option<f64>,
    pub toe_cap: Option<String>,
    pub metal_free: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothingAttributes {
    pub garment_type: Option<String>,
    pub high_visibility: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespiratoryAttributes {
    pub valve: bool,
}
