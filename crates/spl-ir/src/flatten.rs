use spl_ast::AstNode;

use crate::node::IrNode;

/// Depth-first flattening of a parsed play into a linear instruction
/// sequence. A node is emitted before its children iff it is a `Label`;
/// every other node is emitted in post-order (operands before operator,
/// the assigned expression before the assignment itself).
pub fn flatten(root: &AstNode) -> Vec<IrNode> {
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

fn walk(node: &AstNode, out: &mut Vec<IrNode>) {
    match node {
        AstNode::Label { name, children } => {
            out.push(IrNode::Label(name.clone()));
            for child in children {
                walk(child, out);
            }
        }
        AstNode::Assign {
            var,
            expr,
            static_decl,
        } => {
            walk(expr, out);
            out.push(IrNode::Assign {
                var: var.clone(),
                static_decl: *static_decl,
            });
        }
        AstNode::BinaryOperator { left, op, right } => {
            walk(left, out);
            walk(right, out);
            out.push(IrNode::BinaryOperator(*op));
        }
        AstNode::Value(v) => out.push(IrNode::Value(*v)),
        AstNode::DynamicValue(name) => out.push(IrNode::DynamicValue(name.clone())),
        AstNode::PrintVariable { field, as_char } => out.push(IrNode::PrintVariable {
            field: field.clone(),
            as_char: *as_char,
        }),
        AstNode::InputVariable { field, as_char } => out.push(IrNode::InputVariable {
            field: field.clone(),
            as_char: *as_char,
        }),
        AstNode::Goto(name) => out.push(IrNode::Goto(name.clone())),
        AstNode::ConditionalGoto(name) => out.push(IrNode::ConditionalGoto(name.clone())),
        AstNode::Compare { left, right } => out.push(IrNode::Compare {
            left: left.clone(),
            right: right.clone(),
        }),
        AstNode::NoOp => out.push(IrNode::NoOp),
    }
}
