//! Classification and faceted filtering for PPE catalogues.
//!
//! Products arrive already translated. [`scope`] buckets them into category
//! views, [`hazard`] derives protection labels from their standard markings,
//! and [`facets`] offers option sets and filtering over a category view.

pub mod catalog;
pub mod config;
pub mod error;
pub mod facets;
pub mod hazard;
pub mod scope;
pub mod standards;
pub mod telemetry;
