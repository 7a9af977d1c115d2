mod op;
pub use op::ConstraintOp;

mod constraint;
pub use constraint::Constraint;

mod constraints;
pub use constraints::LabelConstraints;

mod role;
pub use role::RoleKind;
