use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::field::{FieldDomain, StandardField};

/// Letter grades reported by ISO 13997 and letter-extensible EN 407 fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl LetterGrade {
    pub const ALL: [LetterGrade; 6] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::E,
        LetterGrade::F,
    ];

    pub fn from_char(value: char) -> Option<Self> {
        match value.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }

    // A sits at the top of the letter band, F directly above numeric 5.
    const fn rank_value(self) -> i8 {
        match self {
            Self::A => 11,
            Self::B => 10,
            Self::C => 9,
            Self::D => 8,
            Self::E => 7,
            Self::F => 6,
        }
    }
}

/// Raw performance level as printed on a product's marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawGrade", into = "RawGrade")]
pub enum PerformanceValue {
    Untested,
    Numeric(u8),
    Letter(LetterGrade),
    Boolean(bool),
}

impl PerformanceValue {
    pub const UNTESTED_TOKEN: &'static str = "X";
    pub const MAX_NUMERIC: u8 = 5;

    /// Parse a marking token. Anything unrecognised becomes `Untested`.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();
        if token.is_empty() || token.eq_ignore_ascii_case(Self::UNTESTED_TOKEN) {
            return Self::Untested;
        }

        if let Ok(level) = token.parse::<u8>() {
            return Self::from_level(i64::from(level));
        }

        match token.to_ascii_lowercase().as_str() {
            "true" | "yes" | "p" => return Self::Boolean(true),
            "false" | "no" => return Self::Boolean(false),
            _ => {}
        }

        let mut chars = token.chars();
        if let (Some(first), None) = (chars.next(), chars.next()) {
            if let Some(letter) = LetterGrade::from_char(first) {
                return Self::Letter(letter);
            }
        }

        debug!(token, "unrecognised performance token; treating as untested");
        Self::Untested
    }

    fn from_level(level: i64) -> Self {
        match u8::try_from(level) {
            Ok(level) if level <= Self::MAX_NUMERIC => Self::Numeric(level),
            _ => {
                debug!(level, "numeric performance level out of range; treating as untested");
                Self::Untested
            }
        }
    }
}

impl fmt::Display for PerformanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceValue::Untested => f.write_str(Self::UNTESTED_TOKEN),
            PerformanceValue::Numeric(level) => write!(f, "{level}"),
            PerformanceValue::Letter(letter) => write!(f, "{}", letter.as_char()),
            PerformanceValue::Boolean(flag) => write!(f, "{flag}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawGrade {
    Flag(bool),
    Integer(i64),
    Decimal(f64),
    Token(String),
}

impl From<RawGrade> for PerformanceValue {
    fn from(raw: RawGrade) -> Self {
        match raw {
            RawGrade::Flag(flag) => Self::Boolean(flag),
            RawGrade::Integer(level) => Self::from_level(level),
            RawGrade::Decimal(level) if level.fract() == 0.0 => Self::from_level(level as i64),
            RawGrade::Decimal(_) => Self::Untested,
            RawGrade::Token(token) => Self::parse(&token),
        }
    }
}

impl From<PerformanceValue> for RawGrade {
    fn from(value: PerformanceValue) -> Self {
        match value {
            PerformanceValue::Untested => RawGrade::Token(PerformanceValue::UNTESTED_TOKEN.to_string()),
            PerformanceValue::Numeric(level) => RawGrade::Integer(i64::from(level)),
            PerformanceValue::Letter(letter) => RawGrade::Token(letter.as_char().to_string()),
            PerformanceValue::Boolean(flag) => RawGrade::Flag(flag),
        }
    }
}

/// Ordinal position of a value within one field's order.
///
/// Ranks from different fields are not comparable in any meaningful way; the
/// free functions below always take the field alongside every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(i8);

impl Rank {
    pub const UNTESTED: Rank = Rank(-1);

    pub const fn value(self) -> i8 {
        self.0
    }

    pub const fn is_rated(self) -> bool {
        self.0 >= 0
    }
}

/// Rendering hint for badges and colour scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    NotRated,
    Low,
    Medium,
    High,
}

impl GradeBand {
    pub const fn label(self) -> &'static str {
        match self {
            GradeBand::NotRated => "not rated",
            GradeBand::Low => "low",
            GradeBand::Medium => "medium",
            GradeBand::High => "high",
        }
    }
}

pub fn rank(field: StandardField, value: PerformanceValue) -> Rank {
    let domain = field.domain();
    match (domain, value) {
        (_, PerformanceValue::Untested) => Rank::UNTESTED,
        (FieldDomain::Numeric { max }, PerformanceValue::Numeric(level)) if level <= max => {
            Rank(level as i8)
        }
        (FieldDomain::LetterExtensible, PerformanceValue::Numeric(level))
            if level <= PerformanceValue::MAX_NUMERIC =>
        {
            Rank(level as i8)
        }
        (
            FieldDomain::Letters | FieldDomain::LetterExtensible,
            PerformanceValue::Letter(letter),
        ) => Rank(letter.rank_value()),
        (FieldDomain::Boolean, PerformanceValue::Boolean(flag)) => Rank(i8::from(flag)),
        (domain, value) => {
            debug!(?field, ?domain, %value, "grade outside field domain; treating as untested");
            Rank::UNTESTED
        }
    }
}

pub fn compare(field: StandardField, left: PerformanceValue, right: PerformanceValue) -> Ordering {
    rank(field, left).cmp(&rank(field, right))
}

/// `value >= threshold` under `field`'s order. An untested value never meets a threshold.
pub fn meets(field: StandardField, value: PerformanceValue, threshold: PerformanceValue) -> bool {
    let observed = rank(field, value);
    observed.is_rated() && observed >= rank(field, threshold)
}

pub fn band(field: StandardField, value: PerformanceValue) -> GradeBand {
    let observed = rank(field, value);
    if !observed.is_rated() {
        return GradeBand::NotRated;
    }

    let (low, high) = field.domain().rank_bounds();
    let span = f32::from((high - low).max(1));
    let position = f32::from(observed.value() - low) / span;

    if position >= 2.0 / 3.0 {
        GradeBand::High
    } else if position >= 1.0 / 3.0 {
        GradeBand::Medium
    } else {
        GradeBand::Low
    }
}
