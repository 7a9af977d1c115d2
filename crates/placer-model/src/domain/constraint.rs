use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    ConstraintOp,
    error::{ModelError, ModelResult},
};

/// Single label predicate evaluated against a store's labels.
///
/// A constraint has no identity: two constraints are equal when key, operator
/// and values are equal.
///
/// The textual token form is `+key=value` (`In`) or `-key=value` (`NotIn`) and is
/// parsed through [`FromStr`]:
///
/// ```rust
/// use placer_model::{Constraint, ConstraintOp};
///
/// let c: Constraint = "+region=us-east-2".parse().unwrap();
/// assert_eq!(c.key(), "region");
/// assert_eq!(c.op(), ConstraintOp::In);
/// assert_eq!(c.values(), ["us-east-2"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    /// Label key, e.g. `zone`.
    pub key: String,
    /// Operator applied to the label value.
    pub op: ConstraintOp,
    /// Right-hand side of the predicate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Constraint {
    /// Create a constraint from its parts.
    pub fn new<K, I, V>(key: K, op: ConstraintOp, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            op,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a constraint holding exactly one value.
    pub fn single<K, V>(key: K, op: ConstraintOp, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            op,
            values: vec![value.into()],
        }
    }

    /// Get the label key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the operator.
    pub fn op(&self) -> ConstraintOp {
        self.op
    }

    /// Get the values.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl FromStr for Constraint {
    type Err = ModelError;

    /// Parse a `+key=value` / `-key=value` token.
    ///
    /// Everything after the first `=` belongs to the value, so `+region=us-east-2`
    /// keeps its dashes. Key and value are trimmed and must not be empty.
    fn from_str(s: &str) -> ModelResult<Self> {
        let token = s.trim();

        let (op, body) = if let Some(rest) = token.strip_prefix('+') {
            (ConstraintOp::In, rest)
        } else if let Some(rest) = token.strip_prefix('-') {
            (ConstraintOp::NotIn, rest)
        } else {
            return Err(malformed(token, "should start with '+' or '-'"));
        };

        let Some((key, value)) = body.split_once('=') else {
            return Err(malformed(token, "should be in format '{+|-}key=value'"));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(malformed(token, "label key is empty"));
        }
        let value = value.trim();
        if value.is_empty() {
            return Err(malformed(token, "label value is empty"));
        }

        Ok(Self::single(key, op, value))
    }
}

fn malformed(token: &str, reason: &str) -> ModelError {
    ModelError::MalformedConstraint(format!("{reason}: '{token}'"))
}

impl fmt::Display for Constraint {
    /// Restores the token form. Presence operators have no token form and are
    /// rendered as `key` / `!key`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            ConstraintOp::In => write!(f, "+{}={}", self.key, self.values.join(",")),
            ConstraintOp::NotIn => write!(f, "-{}={}", self.key, self.values.join(",")),
            ConstraintOp::Exists => f.write_str(&self.key),
            ConstraintOp::NotExists => write!(f, "!{}", self.key),
        }
    }
}
