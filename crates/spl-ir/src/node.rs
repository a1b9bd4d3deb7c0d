use spl_ast::Operator;

/// One entry of the flattened instruction stream the builder consumes.
///
/// Unlike [`spl_ast::AstNode`] these carry no nested children: an
/// `Assign`'s expression, or a `BinaryOperator`'s operands, have already
/// been flattened into the items immediately preceding it.
#[derive(Clone, Debug, PartialEq)]
pub enum IrNode {
    NoOp,
    Assign { var: String, static_decl: bool },
    BinaryOperator(Operator),
    Value(i32),
    DynamicValue(String),
    PrintVariable { field: String, as_char: bool },
    InputVariable { field: String, as_char: bool },
    Goto(String),
    ConditionalGoto(String),
    Label(String),
    Compare { left: String, right: String },
}
