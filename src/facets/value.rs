use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable option value.
///
/// Ordering is total: flags sort before numbers, numbers before text.
/// Numbers compare with `f64::total_cmp`, text compares lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl FacetValue {
    pub fn text(value: impl Into<String>) -> Self {
        FacetValue::Text(value.into())
    }

    /// Interprets user input: `true`/`false`, then numbers, then text.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();
        match token.to_ascii_lowercase().as_str() {
            "true" => return FacetValue::Flag(true),
            "false" => return FacetValue::Flag(false),
            _ => {}
        }
        match token.parse::<f64>() {
            Ok(number) if number.is_finite() => FacetValue::Number(number),
            _ => FacetValue::Text(token.to_string()),
        }
    }

    /// Blank text and non-finite numbers are never offered as options.
    pub fn is_selectable(&self) -> bool {
        match self {
            FacetValue::Flag(_) => true,
            FacetValue::Number(number) => number.is_finite(),
            FacetValue::Text(text) => !text.trim().is_empty(),
        }
    }

    fn variant_order(&self) -> u8 {
        match self {
            FacetValue::Flag(_) => 0,
            FacetValue::Number(_) => 1,
            FacetValue::Text(_) => 2,
        }
    }
}

impl Ord for FacetValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FacetValue::Flag(left), FacetValue::Flag(right)) => left.cmp(right),
            (FacetValue::Number(left), FacetValue::Number(right)) => left.total_cmp(right),
            (FacetValue::Text(left), FacetValue::Text(right)) => left.cmp(right),
            _ => self.variant_order().cmp(&other.variant_order()),
        }
    }
}

impl PartialOrd for FacetValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FacetValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FacetValue {}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetValue::Flag(flag) => write!(f, "{flag}"),
            FacetValue::Number(number) => write!(f, "{number}"),
            FacetValue::Text(text) => f.write_str(text),
        }
    }
}

/// Closed interval with optional bounds. `None` leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Interval {
    /// Swaps reversed bounds so `min <= max` whenever both are set.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        match (min, max) {
            (Some(low), Some(high)) if low > high => Self {
                min: Some(high),
                max: Some(low),
            },
            _ => Self { min, max },
        }
    }

    pub fn point(value: f64) -> Self {
        Self::new(Some(value), Some(value))
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        let reaches_other_min = match (self.max, other.min) {
            (Some(own_max), Some(other_min)) => own_max >= other_min,
            _ => true,
        };
        let starts_before_other_max = match (self.min, other.max) {
            (Some(own_min), Some(other_max)) => own_min <= other_max,
            _ => true,
        };
        reaches_other_min && starts_before_other_max
    }

    pub fn endpoints(&self) -> Vec<FacetValue> {
        self.min
            .into_iter()
            .chain(self.max)
            .filter(|bound| bound.is_finite())
            .map(FacetValue::Number)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_sort_by_kind_then_content() {
        let mut values = vec![
            FacetValue::text("b"),
            FacetValue::Number(10.0),
            FacetValue::Flag(true),
            FacetValue::Number(2.5),
            FacetValue::text("a"),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                FacetValue::Flag(true),
                FacetValue::Number(2.5),
                FacetValue::Number(10.0),
                FacetValue::text("a"),
                FacetValue::text("b"),
            ]
        );
    }

    #[test]
    fn parse_prefers_flags_then_numbers() {
        assert_eq!(FacetValue::parse("TRUE"), FacetValue::Flag(true));
        assert_eq!(FacetValue::parse(" 42 "), FacetValue::Number(42.0));
        assert_eq!(FacetValue::parse("S3"), FacetValue::text("S3"));
        assert_eq!(FacetValue::parse("NaN"), FacetValue::text("NaN"));
    }

    #[test]
    fn intervals_overlap_on_shared_edges() {
        let filter = Interval::new(Some(40.0), Some(45.0));
        assert!(Interval::new(Some(44.0), Some(47.0)).overlaps(&filter));
        assert!(Interval::new(Some(45.0), Some(50.0)).overlaps(&filter));
        assert!(!Interval::new(Some(46.0), None).overlaps(&filter));
        assert!(!Interval::new(None, Some(39.5)).overlaps(&filter));
        assert!(Interval::default().overlaps(&filter));
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let interval = Interval::new(Some(47.0), Some(44.0));
        assert_eq!(interval.min, Some(44.0));
        assert_eq!(interval.max, Some(47.0));
    }
}
