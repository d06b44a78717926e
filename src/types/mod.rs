mod evaluation_report;
mod indexed_roles;
mod node;
mod role_registry;
mod role_rule;
mod role_set;

pub use evaluation_report::EvaluationReport;
pub use indexed_roles::{IndexedRoles, RolesBuilder};
pub(crate) use node::CompiledNode;
pub use node::{role, Roles, RuleNode};
pub use role_registry::RoleRegistry;
pub use role_rule::RoleRule;
pub use role_set::RoleSet;
