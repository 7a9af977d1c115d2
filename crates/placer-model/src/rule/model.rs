use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{LabelConstraints, RoleKind};

/// Placement directive: `count` replicas of kind `role` must be placed on stores
/// whose labels satisfy every entry of `label_constraints`.
///
/// A rule owns its constraints. `Clone` copies the constraint list and every
/// constraint's value list, so a clone can be mutated freely without touching
/// the original.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Identifier assigned by the storage layer; empty until set.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Kind of replica governed by this rule.
    pub role: RoleKind,
    /// Number of replicas governed by this rule.
    pub count: u64,
    /// Predicates every chosen store must satisfy.
    #[serde(default, skip_serializing_if = "LabelConstraints::is_empty")]
    pub label_constraints: LabelConstraints,
}

impl Rule {
    /// Build a rule as given. No validation is applied.
    pub fn new(role: RoleKind, count: u64, label_constraints: impl Into<LabelConstraints>) -> Self {
        Self {
            id: String::new(),
            role,
            count,
            label_constraints: label_constraints.into(),
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns `true` when the rule places replicas anywhere (no constraints).
    pub fn is_catch_all(&self) -> bool {
        self.label_constraints.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "role={} count={} constraints=[", self.role, self.count)?;
        for (i, c) in self.label_constraints.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")?;
        if !self.id.is_empty() {
            write!(f, " id={}", self.id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constraint, ConstraintOp};

    fn sample() -> Rule {
        Rule::new(
            RoleKind::Voter,
            2,
            vec![
                Constraint::single("zone", ConstraintOp::In, "sh"),
                Constraint::single("zone", ConstraintOp::NotIn, "bj"),
            ],
        )
    }

    #[test]
    fn new_leaves_id_empty() {
        let rule = Rule::new(RoleKind::Learner, 1, LabelConstraints::new());
        assert!(rule.id.is_empty());
        assert!(rule.is_catch_all());
    }

    #[test]
    fn clone_id_is_independent() {
        let rule = Rule::default().with_id("434");
        let mut cloned = rule.clone();
        cloned.id = "121".into();

        assert_eq!(rule, Rule::default().with_id("434"));
        assert_eq!(cloned, Rule::default().with_id("121"));
    }

    #[test]
    fn clone_is_structurally_equal() {
        let rule = sample().with_id("7");
        assert_eq!(rule.clone(), rule);
    }

    #[test]
    fn mutating_clone_leaves_original_untouched() {
        let original = sample();
        let mut cloned = original.clone();

        cloned.count = 9;
        cloned.role = RoleKind::Leader;
        cloned.label_constraints.0[0].key = "host".into();
        cloned.label_constraints.0[0].values.push("gz".into());
        cloned.label_constraints.0[1].values.clear();
        cloned
            .label_constraints
            .push(Constraint::single("rack", ConstraintOp::In, "r1"));

        assert_eq!(original, sample());
    }

    #[test]
    fn mutating_original_leaves_clone_untouched() {
        let mut original = sample();
        let cloned = original.clone();

        original.label_constraints.0[1].values[0] = "gz".into();
        original.label_constraints.0.truncate(1);

        assert_eq!(cloned, sample());
    }

    #[test]
    fn display_lists_tokens() {
        assert_eq!(
            sample().to_string(),
            "role=voter count=2 constraints=[+zone=sh, -zone=bj]"
        );
        assert_eq!(
            Rule::new(RoleKind::Voter, 1, LabelConstraints::new())
                .with_id("r1")
                .to_string(),
            "role=voter count=1 constraints=[] id=r1"
        );
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "role": "voter",
                "count": 2,
                "labelConstraints": [
                    {"key": "zone", "op": "in", "values": ["sh"]},
                    {"key": "zone", "op": "notIn", "values": ["bj"]},
                ],
            })
        );

        let back: Rule = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn serde_defaults_missing_constraints() {
        let rule: Rule = serde_json::from_str(r#"{"role":"learner","count":1}"#).unwrap();
        assert_eq!(rule, Rule::new(RoleKind::Learner, 1, LabelConstraints::new()));
    }
}
