//! Compiler from textual label-constraint specs to placement rules.
//!
//! Three input shapes are accepted:
//! - empty text: one rule without constraints;
//! - an array of tokens, `["+zone=sh", "-zone=bj"]`: one rule with those constraints;
//! - a map from comma-joined tokens to counts, `{"+zone=sh,-zone=bj": 2, "+zone=sh": 1}`:
//!   one rule per entry, plus a catch-all rule for replicas left unassigned.
//!
//! Single quotes are accepted as string delimiters.
//!
//! ```rust
//! use placer_core::new_rules;
//! use placer_model::{RoleKind, total_count};
//!
//! let rules = new_rules(RoleKind::Voter, 4, "{'+zone=sh,-zone=bj': 2, '+zone=sh': 1}").unwrap();
//! assert_eq!(rules.len(), 3);
//! assert_eq!(total_count(&rules), Some(4));
//! ```

pub mod compile;
pub mod error;
pub mod normalize;
pub mod shape;

mod separator;

pub use compile::new_rules;
pub use error::{CompileError, CompileResult, ErrorKind};
pub use shape::SpecShape;
