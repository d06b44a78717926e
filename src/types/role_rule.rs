use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use super::evaluation_report::EvaluationReport;
use super::indexed_roles::{IndexedRoles, RolesBuilder};
use super::node::{CompiledNode, RuleNode};
use super::role_registry::RoleRegistry;
use super::role_set::RoleSet;
use crate::parse::{ParseError, ParserConfig, RuleParser};

/// A parsed and compiled role rule, ready to be evaluated many times.
///
/// Keeps the original rule text next to the tree so the text can be stored
/// back unchanged, and a slot-indexed form of the tree for the fast path.
///
/// # Example
///
/// ```
/// use rolerule::RoleRule;
///
/// let rule = RoleRule::parse("accounting AND (finance OR admin)").unwrap();
/// assert!(rule.evaluate(&["accounting", "admin"]));
///
/// let roles = rule.roles_builder().grant("accounting").build();
/// assert!(!rule.evaluate_indexed(&roles));
/// ```
#[derive(Debug, Clone)]
pub struct RoleRule {
    pub(crate) source: String,
    pub(crate) node: RuleNode,
    pub(crate) compiled: CompiledNode,
    pub(crate) registry: RoleRegistry,
}

impl RoleRule {
    /// Parse and compile a rule with the default [`ParserConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `source` is not a valid role expression.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Self::parse_with(source, ParserConfig::default())
    }

    /// Parse and compile a rule with an explicit [`ParserConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `source` is not a valid role expression or
    /// exceeds the configured limits.
    pub fn parse_with(source: &str, config: ParserConfig) -> Result<Self, ParseError> {
        let node = RuleParser::new(source).with_config(config).parse()?;
        let (compiled, registry) = crate::compile::compile(&node);
        Ok(Self {
            source: source.to_owned(),
            node,
            compiled,
            registry,
        })
    }

    /// Read a rule from a text file and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`RoleRuleError`](crate::RoleRuleError) on I/O or parse failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, crate::RoleRuleError> {
        let source = std::fs::read_to_string(path)?;
        Ok(Self::parse(source.trim())?)
    }

    /// The rule text this rule was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed expression tree.
    #[must_use]
    pub fn node(&self) -> &RuleNode {
        &self.node
    }

    /// Registry of the roles this rule references, in first-occurrence order.
    #[must_use]
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    #[must_use]
    pub fn all_roles(&self) -> BTreeSet<String> {
        self.node.all_roles()
    }

    #[must_use]
    pub fn evaluate<R: RoleSet + ?Sized>(&self, roles: &R) -> bool {
        self.node.evaluate(roles)
    }

    pub fn evaluate_detailed<R: RoleSet + ?Sized>(&self, roles: &R) -> EvaluationReport {
        self.node.evaluate_detailed(roles)
    }

    /// Create a builder that resolves granted roles against this rule's registry.
    #[must_use]
    pub fn roles_builder(&self) -> RolesBuilder<'_> {
        RolesBuilder::new(&self.registry)
    }

    /// Evaluate against a pre-indexed role set.
    ///
    /// No string comparison happens here. Use
    /// [`roles_builder()`](Self::roles_builder) to create the role set.
    #[must_use]
    pub fn evaluate_indexed(&self, roles: &IndexedRoles) -> bool {
        crate::evaluate::eval_compiled(&self.compiled, roles)
    }
}

impl fmt::Display for RoleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role;

    #[test]
    fn keeps_source_text() {
        let rule = RoleRule::parse("bob or mary").unwrap();
        assert_eq!(rule.source(), "bob or mary");
        assert_eq!(rule.to_string(), "bob or mary");
        assert_eq!(*rule.node(), role("bob").or(role("mary")));
    }

    #[test]
    fn registry_matches_all_roles() {
        let rule = RoleRule::parse("(accounting AND finance AND NOT (bob))").unwrap();
        let registered: BTreeSet<String> = rule.registry().names().map(str::to_owned).collect();
        assert_eq!(registered, rule.all_roles());
        assert_eq!(rule.registry().get("accounting"), Some(0));
    }

    #[test]
    fn indexed_agrees_with_tree() {
        let rule = RoleRule::parse("accounting AND (finance OR admin)").unwrap();
        let cases: [&[&str]; 4] = [
            &["accounting", "finance"],
            &["accounting", "admin"],
            &["accounting"],
            &["finance"],
        ];
        for granted in cases {
            let indexed = rule.roles_builder().grant_all(granted.iter()).build();
            assert_eq!(
                rule.evaluate_indexed(&indexed),
                rule.evaluate(granted),
                "disagreement for {granted:?}"
            );
        }
    }

    #[test]
    fn parse_with_config_applies_limits() {
        let config = ParserConfig::default().with_max_len(4);
        assert!(RoleRule::parse_with("admin", config).is_err());
    }
}
