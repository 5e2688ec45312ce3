use super::condition::Condition;
use super::HazardLabel;
use crate::catalog::LabelName;
use crate::standards::LetterGrade::{C, D, E, F};
use crate::standards::PerformanceValue::{Boolean, Letter, Numeric};
use crate::standards::StandardField::*;
use crate::standards::PerformanceValue;

// Changing any threshold below reclassifies products already on sale.

const ISO_CUT_HIGH: &[PerformanceValue] = &[Letter(C), Letter(D), Letter(E), Letter(F)];

const GENERAL_MECHANICAL_CUT: &[Condition] = &[
    Condition::AtLeast(En388Cut, Numeric(2)),
    Condition::OneOf(Iso13997Cut, ISO_CUT_HIGH),
];

const GENERAL_MECHANICAL: &[Condition] = &[
    Condition::AtLeast(En388Abrasion, Numeric(2)),
    Condition::AtLeast(En388Tear, Numeric(2)),
    Condition::AtLeast(En388Puncture, Numeric(2)),
    Condition::Any(GENERAL_MECHANICAL_CUT),
];

const HIGH_CUT: &[Condition] = &[
    Condition::AtLeast(En388Cut, Numeric(3)),
    Condition::OneOf(Iso13997Cut, ISO_CUT_HIGH),
];

const HIGH_HEAT: &[Condition] = &[
    Condition::AtLeast(En407ContactHeat, Numeric(2)),
    Condition::AtLeast(En407RadiantHeat, Numeric(2)),
    Condition::AtLeast(En407ConvectiveHeat, Numeric(2)),
    Condition::AtLeast(En407LimitedFlameSpread, Numeric(2)),
];

const MOLTEN_METAL: &[Condition] = &[
    Condition::AtLeast(En407SmallSplashes, Numeric(3)),
    Condition::AtLeast(En407LargeQuantities, Numeric(3)),
];

const LIGHT_DUTY_WELDING: &[Condition] = &[
    Condition::AtLeast(En388Abrasion, Numeric(1)),
    Condition::AtLeast(En388Tear, Numeric(1)),
    Condition::AtLeast(En388Puncture, Numeric(1)),
    Condition::AtLeast(En388Cut, Numeric(1)),
    Condition::AtLeast(En407LimitedFlameSpread, Numeric(3)),
    Condition::AtLeast(En407SmallSplashes, Numeric(2)),
    Condition::AtLeast(En407ContactHeat, Numeric(1)),
];

const HEAVY_DUTY_WELDING: &[Condition] = &[
    Condition::AtLeast(En388Abrasion, Numeric(2)),
    Condition::AtLeast(En388Tear, Numeric(2)),
    Condition::AtLeast(En388Puncture, Numeric(2)),
    Condition::AtLeast(En388Cut, Numeric(1)),
    Condition::AtLeast(En407LimitedFlameSpread, Numeric(3)),
    Condition::AtLeast(En407SmallSplashes, Numeric(3)),
    Condition::AtLeast(En407ContactHeat, Numeric(1)),
    Condition::AtLeast(En407ConvectiveHeat, Numeric(2)),
];

pub(super) static STANDARD_LABELS: &[HazardLabel] = &[
    HazardLabel {
        id: "general_mechanical",
        name: LabelName {
            en: "General mechanical risks",
            it: "Rischi meccanici generici",
        },
        description: "Abrasion, tear and puncture level 2 or better, with cut level 2 or ISO 13997 C-F.",
        condition: Condition::All(GENERAL_MECHANICAL),
    },
    HazardLabel {
        id: "high_cut_risks",
        name: LabelName {
            en: "High cut risks",
            it: "Rischi di taglio elevati",
        },
        description: "Coup test cut level 3 or better, or ISO 13997 C-F.",
        condition: Condition::Any(HIGH_CUT),
    },
    HazardLabel {
        id: "abrasion_protection",
        name: LabelName {
            en: "Abrasion protection",
            it: "Protezione dall'abrasione",
        },
        description: "EN 388 abrasion level 3 or better.",
        condition: Condition::AtLeast(En388Abrasion, Numeric(3)),
    },
    HazardLabel {
        id: "puncture_protection",
        name: LabelName {
            en: "Puncture protection",
            it: "Protezione dalla perforazione",
        },
        description: "EN 388 puncture level 3 or better.",
        condition: Condition::AtLeast(En388Puncture, Numeric(3)),
    },
    HazardLabel {
        id: "impact_protection",
        name: LabelName {
            en: "Impact protection",
            it: "Protezione dagli urti",
        },
        description: "Passed the EN 388 impact test (marked P).",
        condition: Condition::AtLeast(En388Impact, Boolean(true)),
    },
    HazardLabel {
        id: "high_heat",
        name: LabelName {
            en: "High heat and temperature",
            it: "Calore e temperature elevate",
        },
        description: "EN 407 contact, radiant and convective heat plus limited flame spread all level 2 or better.",
        condition: Condition::All(HIGH_HEAT),
    },
    HazardLabel {
        id: "molten_metal",
        name: LabelName {
            en: "Molten metal splashes",
            it: "Spruzzi di metallo fuso",
        },
        description: "EN 407 small splashes or large quantities of molten metal level 3 or better.",
        condition: Condition::Any(MOLTEN_METAL),
    },
    HazardLabel {
        id: "light_duty_welding",
        name: LabelName {
            en: "Light-duty welding",
            it: "Saldatura leggera",
        },
        description: "Baseline EN 388 mechanical protection with EN 407 flame spread 3, small splashes 2 and contact heat 1.",
        condition: Condition::All(LIGHT_DUTY_WELDING),
    },
    HazardLabel {
        id: "heavy_duty_welding",
        name: LabelName {
            en: "Heavy-duty welding",
            it: "Saldatura pesante",
        },
        description: "EN 388 abrasion, tear and puncture 2 and cut 1, with EN 407 flame spread 3, small splashes 3, contact heat 1 and convective heat 2.",
        condition: Condition::All(HEAVY_DUTY_WELDING),
    },
];
