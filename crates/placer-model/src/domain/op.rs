use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// Operator applied by a label constraint to a store's label value.
///
/// - `In`: the label value must be one of the constraint values.
/// - `NotIn`: the label value must not be any of the constraint values.
/// - `Exists`: the store must carry the label key at all.
/// - `NotExists`: the store must not carry the label key.
///
/// Only `In` and `NotIn` have a textual token form (`+key=value` / `-key=value`).
/// The presence operators are accepted when rules are deserialized, but the
/// token parser never produces them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum ConstraintOp {
    In,
    NotIn,
    Exists,
    NotExists,
}

impl ConstraintOp {
    /// Returns the canonical name of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintOp::In => "in",
            ConstraintOp::NotIn => "notIn",
            ConstraintOp::Exists => "exists",
            ConstraintOp::NotExists => "notExists",
        }
    }
}

impl fmt::Display for ConstraintOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstraintOp {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "+" => Ok(ConstraintOp::In),
            "notin" | "not-in" | "-" => Ok(ConstraintOp::NotIn),
            "exists" => Ok(ConstraintOp::Exists),
            "notexists" | "not-exists" => Ok(ConstraintOp::NotExists),
            _ => Err(ModelError::UnknownOperator(s.to_string())),
        }
    }
}
