//! Standard schema and grade normalisation.

pub mod field;
pub mod grade;
pub mod schema;

pub use field::{FieldDomain, FieldLookup, StandardField};
pub use grade::{band, compare, meets, rank, GradeBand, LetterGrade, PerformanceValue, Rank};
pub use schema::{
    ClothingStandards, En149, En166, En166Optional, En352, En388, En397, En397Optional, En407,
    En50365, EnIso11612, EnIso20345, EyeFaceStandards, FootwearStandards, HandStandards,
    HeadStandards, HearingStandards, RespiratoryStandards, SafetyStandards,
};
