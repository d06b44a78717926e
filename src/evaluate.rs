use std::time::Instant;

use crate::types::{CompiledNode, EvaluationReport, IndexedRoles, RoleSet, RuleNode};

pub(crate) fn eval_node<R: RoleSet + ?Sized>(node: &RuleNode, roles: &R) -> bool {
    match node {
        RuleNode::Role(name) => roles.contains_role(name),
        RuleNode::And(operands) => operands.iter().all(|op| eval_node(op, roles)),
        RuleNode::Or(operands) => operands.iter().any(|op| eval_node(op, roles)),
        RuleNode::Not(inner) => !eval_node(inner, roles),
    }
}

pub(crate) fn eval_compiled(node: &CompiledNode, roles: &IndexedRoles) -> bool {
    match node {
        CompiledNode::Role(slot) => roles.is_granted(*slot),
        CompiledNode::And(operands) => operands.iter().all(|op| eval_compiled(op, roles)),
        CompiledNode::Or(operands) => operands.iter().any(|op| eval_compiled(op, roles)),
        CompiledNode::Not(inner) => !eval_compiled(inner, roles),
    }
}

pub(crate) fn evaluate_detailed<R: RoleSet + ?Sized>(node: &RuleNode, roles: &R) -> EvaluationReport {
    let start = Instant::now();
    let result = eval_node(node, roles);
    let duration = start.elapsed();

    let (granted, missing): (Vec<String>, Vec<String>) = node
        .all_roles()
        .into_iter()
        .partition(|name| roles.contains_role(name));

    tracing::debug!(
        result,
        granted = granted.len(),
        missing = missing.len(),
        "evaluated role rule"
    );

    EvaluationReport::new(result, granted, missing, duration)
}
