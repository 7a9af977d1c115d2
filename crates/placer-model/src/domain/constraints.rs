use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{Constraint, ModelResult};

/// Ordered list of label constraints owned by a rule.
///
/// Serialized as a transparent array. Order is preserved but carries no meaning
/// for equality of rule sets, see [`crate::same_rule_set`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct LabelConstraints(pub Vec<Constraint>);

impl LabelConstraints {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse every token of `tokens` with [`Constraint::from_str`](std::str::FromStr).
    ///
    /// Stops at the first malformed token.
    pub fn parse_tokens<I, S>(tokens: I) -> ModelResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|t| t.as_ref().parse::<Constraint>())
            .collect::<ModelResult<Vec<_>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a constraint.
    pub fn push(&mut self, constraint: Constraint) {
        self.0.push(constraint);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.0.iter()
    }

    /// Token form of every constraint, sorted.
    ///
    /// Used as an order-insensitive key when comparing or sorting rules.
    pub fn sorted_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        tokens.sort();
        tokens
    }
}

impl From<Vec<Constraint>> for LabelConstraints {
    fn from(v: Vec<Constraint>) -> Self {
        Self(v)
    }
}

impl FromIterator<Constraint> for LabelConstraints {
    fn from_iter<T: IntoIterator<Item = Constraint>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LabelConstraints {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
