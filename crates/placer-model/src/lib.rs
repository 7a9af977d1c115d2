mod domain;
pub use domain::{Constraint, ConstraintOp, LabelConstraints, RoleKind};

mod error;
pub use error::{ModelError, ModelResult};

mod rule;
pub use rule::{Rule, canonical_sort, same_rule_set, total_count};
