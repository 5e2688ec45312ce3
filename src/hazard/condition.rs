use std::fmt;

use crate::standards::{grade, FieldLookup, PerformanceValue, SafetyStandards, StandardField};

/// Declarative predicate over a product's standard blocks.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Field ranks at or above the threshold under its own order.
    AtLeast(StandardField, PerformanceValue),
    /// Field holds one of the listed values.
    OneOf(StandardField, &'static [PerformanceValue]),
    All(&'static [Condition]),
    Any(&'static [Condition]),
}

impl Condition {
    pub fn evaluate(&self, standards: &SafetyStandards) -> bool {
        match self {
            Condition::All(parts) => parts.iter().all(|part| part.evaluate(standards)),
            Condition::Any(parts) => parts.iter().any(|part| part.evaluate(standards)),
            leaf => leaf.evaluate_leaf(leaf.field_lookup(standards)),
        }
    }

    // Missing blocks and missing fields fail every leaf, whatever the threshold.
    fn evaluate_leaf(&self, observed: FieldLookup) -> bool {
        let FieldLookup::Present(value) = observed else {
            return false;
        };

        match self {
            Condition::AtLeast(field, threshold) => grade::meets(*field, value, *threshold),
            Condition::OneOf(field, accepted) => {
                grade::rank(*field, value).is_rated() && accepted.contains(&value)
            }
            Condition::All(_) | Condition::Any(_) => false,
        }
    }

    fn field_lookup(&self, standards: &SafetyStandards) -> FieldLookup {
        match self.field() {
            Some(field) => field.lookup(standards),
            None => FieldLookup::BlockMissing,
        }
    }

    /// Field read by a leaf; `None` for `All`/`Any`.
    pub fn field(&self) -> Option<StandardField> {
        match self {
            Condition::AtLeast(field, _) | Condition::OneOf(field, _) => Some(*field),
            Condition::All(_) | Condition::Any(_) => None,
        }
    }

    /// Leaf conditions in declaration order.
    pub fn leaves(&self) -> Vec<&Condition> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a Condition>) {
        match self {
            Condition::All(parts) | Condition::Any(parts) => {
                for part in parts.iter() {
                    part.collect_leaves(leaves);
                }
            }
            leaf => leaves.push(leaf),
        }
    }

    /// Evaluate each leaf separately for audit output.
    pub fn explain(&self, standards: &SafetyStandards) -> Vec<LeafOutcome> {
        self.leaves()
            .into_iter()
            .filter_map(|leaf| {
                let field = leaf.field()?;
                let observed = field.lookup(standards);
                Some(LeafOutcome {
                    field,
                    requirement: leaf.requirement(),
                    observed,
                    passed: leaf.evaluate_leaf(observed),
                })
            })
            .collect()
    }

    fn requirement(&self) -> String {
        match self {
            Condition::AtLeast(_, threshold) => format!(">= {threshold}"),
            Condition::OneOf(_, accepted) => {
                let values: Vec<String> = accepted.iter().map(ToString::to_string).collect();
                format!("one of {}", values.join(", "))
            }
            Condition::All(parts) => format!("all of {} conditions", parts.len()),
            Condition::Any(parts) => format!("any of {} conditions", parts.len()),
        }
    }
}

/// One leaf of a rule as observed on a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafOutcome {
    pub field: StandardField,
    pub requirement: String,
    pub observed: FieldLookup,
    pub passed: bool,
}

impl fmt::Display for LeafOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let observed = match self.observed {
            FieldLookup::BlockMissing => "standard not declared".to_string(),
            FieldLookup::FieldMissing => "field not declared".to_string(),
            FieldLookup::Present(value) => value.to_string(),
        };
        let verdict = if self.passed { "pass" } else { "fail" };
        write!(
            f,
            "{} {} (observed {}): {}",
            self.field.code(),
            self.requirement,
            observed,
            verdict
        )
    }
}
