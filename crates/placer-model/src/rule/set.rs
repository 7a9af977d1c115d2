//! Helpers for treating a list of sibling rules as a set.
//!
//! A compiled spec yields rules in no particular order, so comparison and any
//! persisted ordering must not depend on the order they were produced in.

use crate::{Constraint, RoleKind, Rule};

/// Sum of `count` over all rules, `None` on overflow.
pub fn total_count(rules: &[Rule]) -> Option<u64> {
    rules.iter().try_fold(0u64, |acc, r| acc.checked_add(r.count))
}

/// Multiset equality of two rule lists.
///
/// Ignores the order of sibling rules and the order of constraints inside each
/// rule. Rule ids are not compared.
pub fn same_rule_set(a: &[Rule], b: &[Rule]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut left: Vec<_> = a.iter().map(structural_key).collect();
    let mut right: Vec<_> = b.iter().map(structural_key).collect();
    left.sort();
    right.sort();
    left == right
}

/// Sort rules into a reproducible order.
///
/// Key: the rule's constraint tokens sorted lexically, then count, then role.
pub fn canonical_sort(rules: &mut [Rule]) {
    rules.sort_by_cached_key(|r| (r.label_constraints.sorted_tokens(), r.count, r.role));
}

fn structural_key(rule: &Rule) -> (RoleKind, u64, Vec<&Constraint>) {
    let mut constraints: Vec<&Constraint> = rule.label_constraints.iter().collect();
    constraints.sort();
    (rule.role, rule.count, constraints)
}
