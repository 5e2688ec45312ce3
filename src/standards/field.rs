use serde::Serialize;

use super::grade::PerformanceValue;
use super::schema::SafetyStandards;

/// Value domain a field's marking is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDomain {
    /// Levels `0..=max`.
    Numeric { max: u8 },
    /// Letters A–F only.
    Letters,
    /// Levels `0..=5`, continued upward by letters F..A.
    LetterExtensible,
    /// Pass/fail marking.
    Boolean,
}

impl FieldDomain {
    /// Lowest and highest rank a declared value can take.
    pub const fn rank_bounds(self) -> (i8, i8) {
        match self {
            FieldDomain::Numeric { max } => (0, max as i8),
            FieldDomain::Letters => (6, 11),
            FieldDomain::LetterExtensible => (0, 11),
            FieldDomain::Boolean => (0, 1),
        }
    }
}

/// Every rankable marking the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardField {
    En388Abrasion,
    En388Cut,
    En388Tear,
    En388Puncture,
    Iso13997Cut,
    En388Impact,
    En407LimitedFlameSpread,
    En407ContactHeat,
    En407ConvectiveHeat,
    En407RadiantHeat,
    En407SmallSplashes,
    En407LargeQuantities,
    En166OpticalClass,
    En166LiquidDroplets,
    En166LargeDust,
    En166GasFineDust,
    En166ShortCircuitArc,
    En166MoltenMetal,
    En166SurfaceDamage,
    En166AntiFog,
    En166ExtremeTemperature,
    En397LowTemperature,
    En397VeryHighTemperature,
    En397ElectricalInsulation,
    En397LateralDeformation,
    En397MoltenMetal,
    En11612ConvectiveHeat,
    En11612RadiantHeat,
    En11612MoltenAluminium,
    En11612MoltenIron,
    En11612ContactHeat,
}

/// Outcome of reading one field from a product's standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLookup {
    /// The standard block is not declared for the product.
    BlockMissing,
    /// The block is declared but this field is not.
    FieldMissing,
    Present(PerformanceValue),
}

impl FieldLookup {
    pub fn value(self) -> Option<PerformanceValue> {
        match self {
            FieldLookup::Present(value) => Some(value),
            FieldLookup::BlockMissing | FieldLookup::FieldMissing => None,
        }
    }

    fn from_field(field: Option<PerformanceValue>) -> Self {
        field.map_or(FieldLookup::FieldMissing, FieldLookup::Present)
    }
}

impl StandardField {
    pub const fn domain(self) -> FieldDomain {
        use StandardField::*;
        match self {
            En388Abrasion | En388Tear | En388Puncture => FieldDomain::Numeric { max: 4 },
            En388Cut => FieldDomain::Numeric { max: 5 },
            Iso13997Cut => FieldDomain::Letters,
            En407ContactHeat | En407ConvectiveHeat => FieldDomain::LetterExtensible,
            En407LimitedFlameSpread | En407RadiantHeat | En407SmallSplashes
            | En407LargeQuantities => FieldDomain::Numeric { max: 4 },
            En166OpticalClass => FieldDomain::Numeric { max: 3 },
            En11612ConvectiveHeat | En11612MoltenAluminium | En11612MoltenIron
            | En11612ContactHeat => FieldDomain::Numeric { max: 3 },
            En11612RadiantHeat => FieldDomain::Numeric { max: 4 },
            En388Impact
            | En166LiquidDroplets
            | En166LargeDust
            | En166GasFineDust
            | En166ShortCircuitArc
            | En166MoltenMetal
            | En166SurfaceDamage
            | En166AntiFog
            | En166ExtremeTemperature
            | En397LowTemperature
            | En397VeryHighTemperature
            | En397ElectricalInsulation
            | En397LateralDeformation
            | En397MoltenMetal => FieldDomain::Boolean,
        }
    }

    /// Marking code printed on the product for this field.
    pub const fn code(self) -> &'static str {
        use StandardField::*;
        match self {
            En388Abrasion => "EN388 abrasion",
            En388Cut => "EN388 cut",
            En388Tear => "EN388 tear",
            En388Puncture => "EN388 puncture",
            Iso13997Cut => "ISO 13997 cut",
            En388Impact => "EN388 impact",
            En407LimitedFlameSpread => "EN407 limited flame spread",
            En407ContactHeat => "EN407 contact heat",
            En407ConvectiveHeat => "EN407 convective heat",
            En407RadiantHeat => "EN407 radiant heat",
            En407SmallSplashes => "EN407 small splashes of molten metal",
            En407LargeQuantities => "EN407 large quantities of molten metal",
            En166OpticalClass => "1",
            En166LiquidDroplets => "3",
            En166LargeDust => "4",
            En166GasFineDust => "5",
            En166ShortCircuitArc => "8",
            En166MoltenMetal => "9",
            En166SurfaceDamage => "K",
            En166AntiFog => "N",
            En166ExtremeTemperature => "T",
            En397LowTemperature => "-30°C",
            En397VeryHighTemperature => "+150°C",
            En397ElectricalInsulation => "440 Vac",
            En397LateralDeformation => "LD",
            En397MoltenMetal => "MM",
            En11612ConvectiveHeat => "B",
            En11612RadiantHeat => "C",
            En11612MoltenAluminium => "D",
            En11612MoltenIron => "E",
            En11612ContactHeat => "F",
        }
    }

    /// Read this field from a product's standards, distinguishing an
    /// undeclared standard from an undeclared field.
    pub fn lookup(self, standards: &SafetyStandards) -> FieldLookup {
        use StandardField::*;
        match self {
            En388Abrasion | En388Cut | En388Tear | En388Puncture | Iso13997Cut | En388Impact => {
                let Some(block) = standards.hand.as_ref().and_then(|hand| hand.en_388.as_ref())
                else {
                    return FieldLookup::BlockMissing;
                };
                FieldLookup::from_field(match self {
                    En388Abrasion => block.abrasion,
                    En388Cut => block.cut,
                    En388Tear => block.tear,
                    En388Puncture => block.puncture,
                    Iso13997Cut => block.iso_13997,
                    _ => block.impact,
                })
            }
            En407LimitedFlameSpread | En407ContactHeat | En407ConvectiveHeat
            | En407RadiantHeat | En407SmallSplashes | En407LargeQuantities => {
                let Some(block) = standards.hand.as_ref().and_then(|hand| hand.en_407.as_ref())
                else {
                    return FieldLookup::BlockMissing;
                };
                FieldLookup::from_field(match self {
                    En407LimitedFlameSpread => block.limited_flame_spread,
                    En407ContactHeat => block.contact_heat,
                    En407ConvectiveHeat => block.convective_heat,
                    En407RadiantHeat => block.radiant_heat,
                    En407SmallSplashes => block.small_splashes_molten_metal,
                    _ => block.large_quantities_molten_metal,
                })
            }
            En166OpticalClass
            | En166LiquidDroplets
            | En166LargeDust
            | En166GasFineDust
            | En166ShortCircuitArc
            | En166MoltenMetal
            | En166SurfaceDamage
            | En166AntiFog
            | En166ExtremeTemperature => {
                let Some(block) = standards
                    .eye_face
                    .as_ref()
                    .and_then(|eye_face| eye_face.en_166.as_ref())
                else {
                    return FieldLookup::BlockMissing;
                };
                let optional = &block.optional;
                FieldLookup::from_field(match self {
                    En166OpticalClass => block.optical_class,
                    En166LiquidDroplets => optional.liquid_droplets,
                    En166LargeDust => optional.large_dust_particles,
                    En166GasFineDust => optional.gas_and_fine_dust,
                    En166ShortCircuitArc => optional.short_circuit_arc,
                    En166MoltenMetal => optional.molten_metal,
                    En166SurfaceDamage => optional.surface_damage,
                    En166AntiFog => optional.anti_fog,
                    _ => optional.extreme_temperature,
                })
            }
            En397LowTemperature
            | En397VeryHighTemperature
            | En397ElectricalInsulation
            | En397LateralDeformation
            | En397MoltenMetal => {
                let Some(block) = standards.head.as_ref().and_then(|head| head.en_397.as_ref())
                else {
                    return FieldLookup::BlockMissing;
                };
                let optional = &block.optional;
                FieldLookup::from_field(match self {
                    En397LowTemperature => optional.low_temperature,
                    En397VeryHighTemperature => optional.very_high_temperature,
                    En397ElectricalInsulation => optional.electrical_insulation,
                    En397LateralDeformation => optional.lateral_deformation,
                    _ => optional.molten_metal,
                })
            }
            En11612ConvectiveHeat | En11612RadiantHeat | En11612MoltenAluminium
            | En11612MoltenIron | En11612ContactHeat => {
                let Some(block) = standards
                    .clothing
                    .as_ref()
                    .and_then(|clothing| clothing.en_iso_11612.as_ref())
                else {
                    return FieldLookup::BlockMissing;
                };
                FieldLookup::from_field(match self {
                    En11612ConvectiveHeat => block.convective_heat,
                    En11612RadiantHeat => block.radiant_heat,
                    En11612MoltenAluminium => block.molten_aluminium,
                    En11612MoltenIron => block.molten_iron,
                    _ => block.contact_heat,
                })
            }
        }
    }
}
