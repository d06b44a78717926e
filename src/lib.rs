//! Boolean role expressions for access-control rules.
//!
//! A rule such as `accounting AND (finance OR admin) AND NOT contractor` is
//! parsed into a [`RuleNode`] tree and evaluated against the set of roles a
//! principal holds.
//!
//! ```
//! use rolerule::parse;
//!
//! let rule = parse("(accounting AND finance AND NOT (bob))").unwrap();
//! assert!(rule.evaluate(&["accounting", "finance"]));
//! assert!(!rule.evaluate(&["accounting", "finance", "bob"]));
//! assert_eq!(rule.all_roles().len(), 3);
//! ```

mod compile;
mod error;
mod evaluate;
mod parse;
mod types;

pub use error::RoleRuleError;
pub use parse::{parse, ParseError, ParseErrorKind, ParserConfig, RuleParser, DEFAULT_MAX_DEPTH};
pub use types::{
    role, EvaluationReport, IndexedRoles, RoleRegistry, RoleRule, RoleSet, Roles, RolesBuilder,
    RuleNode,
};
