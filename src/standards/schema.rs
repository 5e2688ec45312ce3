//! Typed standard blocks, grouped by product family.
//!
//! Every field is optional. An absent block means the product does not declare
//! that standard at all, which is not the same as declaring it at level zero.

use serde::{Deserialize, Serialize};

use super::grade::PerformanceValue;

/// All standard blocks a product may carry. Usually only one family is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyStandards {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<HandStandards>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_face: Option<EyeFaceStandards>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<HeadStandards>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hearing: Option<HearingStandards>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footwear: Option<FootwearStandards>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clothing: Option<ClothingStandards>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respiratory: Option<RespiratoryStandards>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandStandards {
    pub en_388: Option<En388>,
    pub en_407: Option<En407>,
}

/// EN 388:2016 mechanical risks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct En388 {
    pub abrasion: Option<PerformanceValue>,
    pub cut: Option<PerformanceValue>,
    pub tear: Option<PerformanceValue>,
    pub puncture: Option<PerformanceValue>,
    pub iso_13997: Option<PerformanceValue>,
    pub impact: Option<PerformanceValue>,
}

/// EN 407 thermal risks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct En407 {
    pub limited_flame_spread: Option<PerformanceValue>,
    pub contact_heat: Option<PerformanceValue>,
    pub convective_heat: Option<PerformanceValue>,
    pub radiant_heat: Option<PerformanceValue>,
    pub small_splashes_molten_metal: Option<PerformanceValue>,
    pub large_quantities_molten_metal: Option<PerformanceValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeFaceStandards {
    pub en_166: Option<En166>,
}

/// EN 166 eye and face protection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct En166 {
    pub optical_class: Option<PerformanceValue>,
    /// Mechanical strength symbol (S, F, B, A).
    pub mechanical_strength: Option<String>,
    pub optional: En166Optional,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct En166Optional {
    pub liquid_droplets: Option<PerformanceValue>,
    pub large_dust_particles: Option<PerformanceValue>,
    pub gas_and_fine_dust: Option<PerformanceValue>,
    pub short_circuit_arc: Option<PerformanceValue>,
    pub molten_metal: Option<PerformanceValue>,
    pub surface_damage: Option<PerformanceValue>,
    pub anti_fog: Option<PerformanceValue>,
    pub extreme_temperature: Option<PerformanceValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadStandards {
    pub en_397: Option<En397>,
    pub en_50365: Option<En50365>,
}

/// EN 397 industrial safety helmets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct En397 {
    pub optional: En397Optional,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct En397Optional {
    pub low_temperature: Option<PerformanceValue>,
    pub very_high_temperature: Option<PerformanceValue>,
    pub electrical_insulation: Option<PerformanceValue>,
    pub lateral_deformation: Option<PerformanceValue>,
    pub molten_metal: Option<PerformanceValue>,
}

/// EN 50365 electrically insulating helmets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct En50365 {
    pub voltage_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HearingStandards {
    pub en_352: Option<En352>,
}

/// EN 352 hearing protectors; attenuation in dB.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct En352 {
    pub snr: Option<f64>,
    pub h: Option<f64>,
    pub m: Option<f64>,
    pub l: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootwearStandards {
    pub en_iso_20345: Option<EnIso20345>,
}

/// EN ISO 20345 safety footwear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnIso20345 {
    /// Base class such as SB, S1, S1P, S3.
    pub safety_class: Option<String>,
    /// Additional markings such as HRO, WR, CI, HI.
    pub markings: Vec<String>,
    /// Slip resistance code such as SRA, SRB, SRC.
    pub slip_resistance: Option<String>,
}

impl EnIso20345 {
    /// Class, markings and slip code as one list, in that order.
    pub fn combined_classes(&self) -> Vec<String> {
        self.safety_class
            .iter()
            .chain(self.markings.iter())
            .chain(self.slip_resistance.iter())
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothingStandards {
    pub en_iso_11612: Option<EnIso11612>,
}

/// EN ISO 11612 heat and flame protective clothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnIso11612 {
    /// Flame spread procedure codes, e.g. `["A1", "A2"]`.
    pub limited_flame_spread: Vec<String>,
    pub convective_heat: Option<PerformanceValue>,
    pub radiant_heat: Option<PerformanceValue>,
    pub molten_aluminium: Option<PerformanceValue>,
    pub molten_iron: Option<PerformanceValue>,
    pub contact_heat: Option<PerformanceValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespiratoryStandards {
    pub en_149: Option<En149>,
}

/// EN 149 filtering half masks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct En149 {
    /// FFP1, FFP2 or FFP3.
    pub protection_class: Option<String>,
    /// `true` for "R" (reusable), `false` for "NR".
    pub reusable: Option<bool>,
    /// Passed the dolomite clogging test ("D").
    pub dolomite: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_fields_deserialize_as_absent() {
        let block: En388 =
            serde_json::from_str(r#"{"abrasion": 3, "cut": "X", "iso_13997": null}"#)
                .expect("block parses");
        assert_eq!(block.abrasion, Some(PerformanceValue::Numeric(3)));
        assert_eq!(block.cut, Some(PerformanceValue::Untested));
        assert_eq!(block.iso_13997, None);
        assert_eq!(block.tear, None);
    }

    #[test]
    fn combined_classes_joins_class_markings_and_slip_code() {
        let footwear = EnIso20345 {
            safety_class: Some("S3".to_string()),
            markings: vec!["HRO".to_string(), " ".to_string()],
            slip_resistance: Some("SRC".to_string()),
        };
        assert_eq!(footwear.combined_classes(), vec!["S3", "HRO", "SRC"]);
    }
}
