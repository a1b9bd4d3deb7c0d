#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use spl_ast::{AstNode, Operator};

    use crate::flatten;

    fn leaf() -> impl Strategy<Value = AstNode> {
        prop_oneof![
            Just(AstNode::NoOp),
            any::<i32>().prop_map(AstNode::Value),
            "[a-z]{1,6}".prop_map(AstNode::DynamicValue),
            "[a-z]{1,6}".prop_map(AstNode::Goto),
            "[a-z]{1,6}".prop_map(AstNode::ConditionalGoto),
            ("[a-z]{1,6}", "[a-z]{1,6}").prop_map(|(l, r)| AstNode::Compare { left: l, right: r }),
        ]
    }

    fn ast_tree() -> impl Strategy<Value = AstNode> {
        leaf().prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| AstNode::BinaryOperator {
                    left: Box::new(l),
                    op: Operator::Add,
                    right: Box::new(r),
                }),
                ("[a-z]{1,6}", inner.clone(), any::<bool>()).prop_map(
                    |(var, expr, static_decl)| AstNode::Assign {
                        var,
                        expr: Box::new(expr),
                        static_decl,
                    }
                ),
                ("[a-z]{1,6}", prop::collection::vec(inner, 0..4))
                    .prop_map(|(name, children)| AstNode::Label { name, children }),
            ]
        })
    }

    fn count_nodes(node: &AstNode) -> usize {
        1 + node.children().iter().map(|c| count_nodes(c)).sum::<usize>()
    }

    proptest! {
        #[test]
        fn flatten_emits_every_node_exactly_once(tree in ast_tree()) {
            let flat = flatten(&tree);
            prop_assert_eq!(flat.len(), count_nodes(&tree));
        }

        #[test]
        fn flatten_never_panics_on_arbitrary_trees(tree in ast_tree()) {
            let _ = flatten(&tree);
        }
    }
}
