use super::CategoryKey;

/// Bumped whenever a keyword below is added, removed or edited.
pub const KEYWORD_TABLE_REVISION: u32 = 1;

/// English and Italian substrings that place a product in a category.
/// Entries are stored already normalised (lower case, single spaces).
#[derive(Debug)]
pub struct KeywordSet {
    pub en: &'static [&'static str],
    pub it: &'static [&'static str],
}

impl KeywordSet {
    pub(crate) fn matches(&self, normalized_text: &str) -> bool {
        self.en
            .iter()
            .chain(self.it.iter())
            .any(|keyword| normalized_text.contains(keyword))
    }

    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.en.iter().chain(self.it.iter()).copied()
    }
}

pub const EYE_FACE: KeywordSet = KeywordSet {
    en: &["eye", "face", "glasses", "goggle", "visor", "spectacle"],
    it: &["occhi", "viso", "occhiali", "visier"],
};

pub const FOOTWEAR: KeywordSet = KeywordSet {
    en: &["footwear", "shoe", "boot", "sandal", "clog"],
    it: &["calzatur", "scarp", "stival", "sandal", "zoccol"],
};

pub const HEAD: KeywordSet = KeywordSet {
    en: &["head", "helmet", "hard hat", "bump cap"],
    it: &["testa", "elmett", "casco", "caschi"],
};

// Bare "ear" would also match "footwear" and "workwear".
pub const HEARING: KeywordSet = KeywordSet {
    en: &["hearing", "earplug", "ear plug", "earmuff", "ear muff", "ear defender"],
    it: &["udito", "auricolar", "cuffie antirumore", "otoprotettor"],
};

pub const RESPIRATORY: KeywordSet = KeywordSet {
    en: &["respirat", "breathing", "mask", "filtering facepiece"],
    it: &["vie respiratorie", "respirator", "masch", "facciale filtrante"],
};

// "tute" is left out: it is a prefix of "tutela".
pub const CLOTHING: KeywordSet = KeywordSet {
    en: &["clothing", "garment", "jacket", "trousers", "coverall", "workwear"],
    it: &["abbigliamento", "indument", "giacc", "pantalon", "tuta"],
};

pub const GLOVES: KeywordSet = KeywordSet {
    en: &["glove", "hand protection"],
    it: &["guant", "protezione mani", "protezione delle mani"],
};

pub const MECHANICAL_GLOVES: KeywordSet = KeywordSet {
    en: &["mechanical", "cut", "general purpose", "assembly"],
    it: &["meccanic", "taglio", "uso generale", "assemblaggio"],
};

pub const THERMAL_GLOVES: KeywordSet = KeywordSet {
    en: &["heat", "thermal", "welding", "fire", "cold"],
    it: &["calore", "termic", "saldatur", "fuoco", "freddo"],
};

pub const CHEMICAL_GLOVES: KeywordSet = KeywordSet {
    en: &["chemical", "disposable", "biological"],
    it: &["chimic", "monouso", "biologic"],
};

/// Keyword sets a product must hit, every one of them, to join `key`.
pub fn requirements(key: CategoryKey) -> &'static [&'static KeywordSet] {
    match key {
        CategoryKey::EyeFace => &[&EYE_FACE],
        CategoryKey::Footwear => &[&FOOTWEAR],
        CategoryKey::Head => &[&HEAD],
        CategoryKey::Hearing => &[&HEARING],
        CategoryKey::Respiratory => &[&RESPIRATORY],
        CategoryKey::Clothing => &[&CLOTHING],
        CategoryKey::Gloves => &[&GLOVES],
        CategoryKey::MechanicalGloves => &[&GLOVES, &MECHANICAL_GLOVES],
        CategoryKey::ThermalGloves => &[&GLOVES, &THERMAL_GLOVES],
        CategoryKey::ChemicalGloves => &[&GLOVES, &CHEMICAL_GLOVES],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::normalizer::normalize_text;

    #[test]
    fn keywords_are_stored_normalized() {
        for key in CategoryKey::ALL {
            for set in requirements(key) {
                for keyword in set.keywords() {
                    assert_eq!(normalize_text(keyword), keyword, "{key:?}: {keyword}");
                    assert!(!keyword.is_empty());
                }
            }
        }
    }

    #[test]
    fn hearing_keywords_skip_wear_suffixes() {
        assert!(!HEARING.matches("safety footwear"));
        assert!(!HEARING.matches("workwear"));
        assert!(HEARING.matches("reusable earplugs"));
    }

    #[test]
    fn clothing_keywords_skip_tutela() {
        assert!(!CLOTHING.matches("tutela delle mani"));
        assert!(CLOTHING.matches("tuta ignifuga"));
    }
}
