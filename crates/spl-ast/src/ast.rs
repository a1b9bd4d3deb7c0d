/// The two arithmetic operators a play can express.
///
/// `Add` covers both the explicit `with`/`and` connective and the implicit
/// addition between adjacent adjective-led terms; `Multiply` is how an
/// adjective doubles the value of the term it prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
}

/// A node in the parsed play tree.
///
/// `Label` is the only variant whose children are emitted *before* it by
/// the flattener (see `spl-ir`); every other variant's children are
/// emitted in post-order.
#[derive(Clone, Debug, PartialEq)]
pub enum AstNode {
    NoOp,
    /// `static_decl` is true for a preamble variable initialization, false
    /// for an in-scene assignment spoken by a character.
    Assign {
        var: String,
        expr: Box<AstNode>,
        static_decl: bool,
    },
    BinaryOperator {
        left: Box<AstNode>,
        op: Operator,
        right: Box<AstNode>,
    },
    Value(i32),
    DynamicValue(String),
    PrintVariable {
        field: String,
        as_char: bool,
    },
    InputVariable {
        field: String,
        as_char: bool,
    },
    Goto(String),
    ConditionalGoto(String),
    Label {
        name: String,
        children: Vec<AstNode>,
    },
    Compare {
        left: String,
        right: String,
    },
}

impl AstNode {
    /// This node's children, in the order the flattener should visit them.
    pub fn children(&self) -> Vec<&AstNode> {
        match self {
            AstNode::NoOp
            | AstNode::Value(_)
            | AstNode::DynamicValue(_)
            | AstNode::PrintVariable { .. }
            | AstNode::InputVariable { .. }
            | AstNode::Goto(_)
            | AstNode::ConditionalGoto(_)
            | AstNode::Compare { .. } => Vec::new(),
            AstNode::Assign { expr, .. } => vec![expr.as_ref()],
            AstNode::BinaryOperator { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            AstNode::Label { children, .. } => children.iter().collect(),
        }
    }

    /// True for the one variant the flattener emits before its children.
    pub fn is_label(&self) -> bool {
        matches!(self, AstNode::Label { .. })
    }
}
