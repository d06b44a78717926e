use crate::types::{CompiledNode, RoleRegistry, RuleNode};

/// Resolve every role name in `node` to a registry slot.
///
/// Slots are assigned in left-to-right order of first occurrence.
pub(crate) fn compile(node: &RuleNode) -> (CompiledNode, RoleRegistry) {
    let mut registry = RoleRegistry::new();
    let compiled = compile_node(node, &mut registry);
    tracing::trace!(roles = registry.len(), "compiled role rule");
    (compiled, registry)
}

fn compile_node(node: &RuleNode, registry: &mut RoleRegistry) -> CompiledNode {
    match node {
        RuleNode::Role(name) => CompiledNode::Role(registry.register(name)),
        RuleNode::And(operands) => CompiledNode::And(compile_all(operands, registry)),
        RuleNode::Or(operands) => CompiledNode::Or(compile_all(operands, registry)),
        RuleNode::Not(inner) => CompiledNode::Not(Box::new(compile_node(inner, registry))),
    }
}

fn compile_all(operands: &[RuleNode], registry: &mut RoleRegistry) -> Vec<CompiledNode> {
    operands.iter().map(|op| compile_node(op, registry)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role;

    #[test]
    fn repeated_role_shares_slot() {
        let node = role("a").and(role("b")).or(!role("a"));
        let (compiled, registry) = compile(&node);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            compiled,
            CompiledNode::Or(vec![
                CompiledNode::And(vec![CompiledNode::Role(0), CompiledNode::Role(1)]),
                CompiledNode::Not(Box::new(CompiledNode::Role(0))),
            ])
        );
    }

    #[test]
    fn chains_compile_flat() {
        let node = role("a").or(role("b")).or(role("c"));
        let (compiled, registry) = compile(&node);
        assert_eq!(registry.len(), 3);
        assert_eq!(
            compiled,
            CompiledNode::Or(vec![
                CompiledNode::Role(0),
                CompiledNode::Role(1),
                CompiledNode::Role(2),
            ])
        );
    }

    #[test]
    fn single_role() {
        let (compiled, registry) = compile(&role("bob"));
        assert_eq!(compiled, CompiledNode::Role(0));
        assert_eq!(registry.name(0), Some("bob"));
    }
}
