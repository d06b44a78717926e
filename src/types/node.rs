use std::collections::BTreeSet;
use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use super::evaluation_report::EvaluationReport;
use super::role_set::RoleSet;
use crate::parse::ParseError;

/// A parsed boolean expression over role names.
///
/// Trees are produced by [`RuleParser`](crate::RuleParser) or built by hand
/// with [`role()`], [`RuleNode::and`], [`RuleNode::or`] and `!`. They hold no
/// interior mutability and can be shared freely between threads.
///
/// `And` and `Or` hold their operands in source order. A chain such as
/// `a OR b OR c` is one `Or` node with three operands, so the depth of a
/// tree follows the parenthesis and `NOT` nesting of its source, never the
/// length of a chain. An empty `And` is true and an empty `Or` is false.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleNode {
    Role(String),
    And(Vec<RuleNode>),
    Or(Vec<RuleNode>),
    Not(Box<RuleNode>),
}

/// Compiled expression with role names resolved to registry slots.
/// Produced by [`RoleRule`](super::RoleRule) compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CompiledNode {
    Role(usize),
    And(Vec<CompiledNode>),
    Or(Vec<CompiledNode>),
    Not(Box<CompiledNode>),
}

impl RuleNode {
    /// Evaluate the expression against a set of active roles.
    ///
    /// Role names are compared verbatim; `Admin` and `admin` are different roles.
    #[must_use]
    pub fn evaluate<R: RoleSet + ?Sized>(&self, roles: &R) -> bool {
        crate::evaluate::eval_node(self, roles)
    }

    /// Evaluate and report which referenced roles were present or missing.
    pub fn evaluate_detailed<R: RoleSet + ?Sized>(&self, roles: &R) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(self, roles)
    }

    /// Every distinct role name referenced anywhere in the tree.
    #[must_use]
    pub fn all_roles(&self) -> BTreeSet<String> {
        self.roles().map(str::to_owned).collect()
    }

    /// Role names in left-to-right order, duplicates included.
    pub fn roles(&self) -> Roles<'_> {
        Roles { stack: vec![self] }
    }

    /// Nesting depth of the tree. A lone role has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            RuleNode::Role(_) => 1,
            RuleNode::And(operands) | RuleNode::Or(operands) => {
                1 + operands.iter().map(RuleNode::depth).max().unwrap_or(0)
            }
            RuleNode::Not(inner) => 1 + inner.depth(),
        }
    }

    /// Conjunction of `self` and `other`. Operands that are themselves
    /// `And` nodes are spliced in, so chains stay flat.
    #[must_use]
    pub fn and(self, other: RuleNode) -> RuleNode {
        let mut operands = self.into_and_operands();
        operands.extend(other.into_and_operands());
        RuleNode::And(operands)
    }

    /// Disjunction of `self` and `other`, flattened like [`and`](Self::and).
    #[must_use]
    pub fn or(self, other: RuleNode) -> RuleNode {
        let mut operands = self.into_or_operands();
        operands.extend(other.into_or_operands());
        RuleNode::Or(operands)
    }

    fn into_and_operands(self) -> Vec<RuleNode> {
        match self {
            RuleNode::And(operands) => operands,
            other => vec![other],
        }
    }

    fn into_or_operands(self) -> Vec<RuleNode> {
        match self {
            RuleNode::Or(operands) => operands,
            other => vec![other],
        }
    }
}

impl Not for RuleNode {
    type Output = RuleNode;

    fn not(self) -> RuleNode {
        RuleNode::Not(Box::new(self))
    }
}

/// Build a leaf node matching a single role.
///
/// Names containing whitespace or parentheses, or equal to a keyword, will not
/// survive a round trip through `Display` and the parser.
#[must_use]
pub fn role(name: &str) -> RuleNode {
    RuleNode::Role(name.to_owned())
}

impl fmt::Display for RuleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleNode::Role(name) => write!(f, "{name}"),
            RuleNode::And(operands) => write_chain(f, operands, " AND "),
            RuleNode::Or(operands) => write_chain(f, operands, " OR "),
            RuleNode::Not(inner) => write!(f, "(NOT {inner})"),
        }
    }
}

fn write_chain(f: &mut fmt::Formatter<'_>, operands: &[RuleNode], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{operand}")?;
    }
    f.write_str(")")
}

impl FromStr for RuleNode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

/// Depth-first iterator over the role names of a [`RuleNode`].
#[derive(Debug, Clone)]
pub struct Roles<'a> {
    stack: Vec<&'a RuleNode>,
}

impl<'a> Iterator for Roles<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(node) = self.stack.pop() {
            match node {
                RuleNode::Role(name) => return Some(name.as_str()),
                RuleNode::And(operands) | RuleNode::Or(operands) => {
                    self.stack.extend(operands.iter().rev());
                }
                RuleNode::Not(inner) => self.stack.push(inner),
            }
        }
        None
    }
}
