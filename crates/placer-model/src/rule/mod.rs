mod model;
pub use model::Rule;

mod set;
pub use set::{canonical_sort, same_rule_set, total_count};
