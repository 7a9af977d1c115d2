use placer_model::{LabelConstraints, RoleKind, Rule, total_count};
use tracing::{debug, trace};

use crate::{
    error::{CompileError, CompileResult},
    normalize::normalize_quotes,
    shape::SpecShape,
};

/// Compile `text` into placement rules for `role`.
///
/// - Empty text and array text yield exactly one rule with `replicas` replicas;
///   `replicas == 0` is rejected.
/// - Map text yields one rule per entry. When `replicas` is non-zero, the
///   declared counts must not exceed it and any remainder goes to one extra rule
///   without constraints. When `replicas` is zero the total is unconstrained.
///
/// The returned rules form a set; their order carries no meaning. On error no
/// rules are returned.
pub fn new_rules(role: RoleKind, replicas: u64, text: &str) -> CompileResult<Vec<Rule>> {
    let result = SpecShape::parse(&normalize_quotes(text)).and_then(|shape| {
        debug!(shape = shape.name(), %role, replicas, "compiling label constraints");
        build(role, replicas, shape)
    });

    match &result {
        Ok(rules) => {
            for rule in rules {
                trace!(%rule, "built placement rule");
            }
            debug!(rules = rules.len(), total = ?total_count(rules), "label constraints compiled");
        }
        Err(e) => debug!(kind = %e.kind(), error = %e, "label constraints rejected"),
    }
    result
}

fn build(role: RoleKind, replicas: u64, shape: SpecShape) -> CompileResult<Vec<Rule>> {
    match shape {
        SpecShape::Empty => single_rule(role, replicas, LabelConstraints::new()),
        SpecShape::Array(tokens) => {
            let constraints = LabelConstraints::parse_tokens(&tokens)
                .map_err(|e| CompileError::InvalidFormat(e.to_string()))?;
            single_rule(role, replicas, constraints)
        }
        SpecShape::Map(entries) => map_rules(role, replicas, entries),
    }
}

fn single_rule(
    role: RoleKind,
    replicas: u64,
    constraints: LabelConstraints,
) -> CompileResult<Vec<Rule>> {
    if replicas == 0 {
        return Err(CompileError::InvalidReplicas(
            "count of replicas should be positive".to_string(),
        ));
    }
    Ok(vec![Rule::new(role, replicas, constraints)])
}

fn map_rules(
    role: RoleKind,
    replicas: u64,
    entries: Vec<(String, i128)>,
) -> CompileResult<Vec<Rule>> {
    let mut rules = Vec::with_capacity(entries.len() + 1);
    let mut sum: u64 = 0;

    for (key, count) in entries {
        let count = u64::try_from(count)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| CompileError::InvalidMapCount(format!("'{key}': {count}")))?;

        let constraints = LabelConstraints::parse_tokens(key.split(','))
            .map_err(|e| CompileError::InvalidConstraintFormat(format!("in '{key}': {e}")))?;

        sum = sum.checked_add(count).ok_or_else(|| {
            CompileError::InvalidReplicas("sum of dict constraints overflows".to_string())
        })?;
        rules.push(Rule::new(role, count, constraints));
    }

    if replicas == 0 {
        return Ok(rules);
    }
    if sum > replicas {
        return Err(CompileError::InvalidReplicas(format!(
            "should be larger or equal to the number of total replicas, but {replicas} < {sum}"
        )));
    }
    if sum < replicas {
        rules.push(Rule::new(role, replicas - sum, LabelConstraints::new()));
    }
    Ok(rules)
}
