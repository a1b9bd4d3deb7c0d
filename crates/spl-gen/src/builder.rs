use spl_ast::Operator;
use spl_class::{CodeAttribute, ClassFile, Entry, Method, FIXED_STACK_AND_LOCALS, METHOD_ACCESS_FLAGS};
use spl_ir::IrNode;
use spl_util::Result;

use crate::instr;
use crate::placeholder::Item;
use crate::resolve::resolve;

/// Cursor into the program-argument array, consumed one slot per Input
/// statement.
const INPUT_INDEX_FIELD: &str = "$input_index";
/// Result of the last `Compare`: zero means equal.
const CONDITIONAL_FIELD: &str = "$conditional";

const SYSTEM_CLASS: &str = "java/lang/System";
const PRINT_STREAM_CLASS: &str = "java/io/PrintStream";
const STRING_CLASS: &str = "java/lang/String";
const INTEGER_CLASS: &str = "java/lang/Integer";

/// Consumes the flattened IR for a play and produces a fully assembled,
/// jump-resolved `ClassFile`.
pub struct Builder {
    class: ClassFile,
    items: Vec<Item>,
}

impl Builder {
    pub fn new(name: &str, major_version: u16, minor_version: u16) -> Result<Self> {
        let class = ClassFile::new(name, major_version, minor_version)?;
        let mut builder = Self {
            class,
            items: Vec::new(),
        };
        builder.prologue()?;
        Ok(builder)
    }

    fn prologue(&mut self) -> Result<()> {
        self.set_field_const(INPUT_INDEX_FIELD, 0)?;
        self.set_field_const(CONDITIONAL_FIELD, 0)?;
        Ok(())
    }

    pub fn build(mut self, ir: &[IrNode]) -> Result<ClassFile> {
        for node in ir {
            self.emit_node(node)?;
        }
        self.items.push(Item::Bytes(instr::return_void()));

        let code = resolve(&self.items)?;
        self.finalize_main_method(code)?;
        self.class.validate()?;
        Ok(self.class)
    }

    fn emit_node(&mut self, node: &IrNode) -> Result<()> {
        match node {
            IrNode::NoOp => {}
            IrNode::Value(value) => self.push_bytes(instr::push_int(*value)?),
            IrNode::DynamicValue(name) => self.push_field(name)?,
            IrNode::BinaryOperator(Operator::Add) => self.push_bytes(instr::iadd()),
            IrNode::BinaryOperator(Operator::Multiply) => self.push_bytes(instr::imul()),
            IrNode::Assign { var, .. } => self.store_field(var)?,
            IrNode::PrintVariable { field, as_char } => self.print_field(field, *as_char)?,
            IrNode::InputVariable { field, as_char } => self.read_input(field, *as_char)?,
            IrNode::Compare { left, right } => self.compare(left, right)?,
            IrNode::Goto(target) => self.items.push(Item::Jump {
                target: target.clone(),
                conditional: false,
            }),
            IrNode::ConditionalGoto(target) => {
                self.push_field(CONDITIONAL_FIELD)?;
                self.items.push(Item::Jump {
                    target: target.clone(),
                    conditional: true,
                });
            }
            IrNode::Label(name) => self.items.push(Item::Label(name.clone())),
        }
        Ok(())
    }

    fn push_bytes(&mut self, bytes: Vec<u8>) {
        self.items.push(Item::Bytes(bytes));
    }

    fn declare_field(&mut self, name: &str) -> Result<u16> {
        self.class.fields.declare_int_field(name, &mut self.class.pool)?;
        self.class.pool.add_field_ref(&self.class.name, name, "I")
    }

    fn push_field(&mut self, name: &str) -> Result<()> {
        let field_ref = self.declare_field(name)?;
        self.push_bytes(instr::getstatic(field_ref));
        Ok(())
    }

    fn store_field(&mut self, name: &str) -> Result<()> {
        let field_ref = self.declare_field(name)?;
        self.push_bytes(instr::putstatic(field_ref));
        Ok(())
    }

    fn set_field_const(&mut self, name: &str, value: i32) -> Result<()> {
        self.push_bytes(instr::push_int(value)?);
        self.store_field(name)
    }

    /// `get-static System.out; swap; (if as_char: i2c); invoke-virtual
    /// println` — the field's value must already be on the stack; `swap`
    /// is needed because the operand is pushed before the receiver.
    fn print_field(&mut self, field: &str, as_char: bool) -> Result<()> {
        self.push_field(field)?;

        let out_ref = self
            .class
            .pool
            .add_field_ref(SYSTEM_CLASS, "out", "Ljava/io/PrintStream;")?;
        let descriptor = if as_char { "(C)V" } else { "(I)V" };
        let println_ref = self
            .class
            .pool
            .add_method_ref(PRINT_STREAM_CLASS, "println", descriptor)?;

        self.push_bytes(instr::getstatic(out_ref));
        self.push_bytes(instr::swap());
        if as_char {
            self.push_bytes(instr::i2c());
        }
        self.push_bytes(instr::invokevirtual(println_ref));
        Ok(())
    }

    /// `aload args; get-static $input_index; aaload;` then either
    /// `charAt(I)C` (char mode) or `Integer.parseInt(String)I` (int mode);
    /// stores the result and increments `$input_index`.
    fn read_input(&mut self, field: &str, as_char: bool) -> Result<()> {
        let input_index_ref = self.declare_field(INPUT_INDEX_FIELD)?;

        self.push_bytes(instr::aload(0));
        self.push_bytes(instr::getstatic(input_index_ref));
        self.push_bytes(instr::aaload());

        if as_char {
            let char_at_ref = self.class.pool.add_method_ref(STRING_CLASS, "charAt", "(I)C")?;
            self.push_bytes(instr::push_int(0)?);
            self.push_bytes(instr::invokevirtual(char_at_ref));
        } else {
            let parse_int_ref = self.class.pool.add_method_ref(
                INTEGER_CLASS,
                "parseInt",
                "(Ljava/lang/String;)I",
            )?;
            self.push_bytes(instr::invokestatic(parse_int_ref));
        }

        self.store_field(field)?;

        self.push_field(INPUT_INDEX_FIELD)?;
        self.push_bytes(instr::push_int(1)?);
        self.push_bytes(instr::iadd());
        self.store_field(INPUT_INDEX_FIELD)
    }

    /// `get-static a; i2l; get-static b; i2l; lcmp; put-static $conditional`
    fn compare(&mut self, left: &str, right: &str) -> Result<()> {
        self.push_field(left)?;
        self.push_bytes(instr::i2l());
        self.push_field(right)?;
        self.push_bytes(instr::i2l());
        self.push_bytes(instr::lcmp());
        self.store_field(CONDITIONAL_FIELD)
    }

    fn finalize_main_method(&mut self, code: Vec<u8>) -> Result<()> {
        let code_name = self.class.pool.add(Entry::Utf8("Code".to_string()))?;
        let main_name = self.class.pool.add(Entry::Utf8("main".to_string()))?;
        let main_descriptor = self
            .class
            .pool
            .add(Entry::Utf8("([Ljava/lang/String;)V".to_string()))?;

        self.class.methods.push(Method {
            name_index: main_name,
            descriptor_index: main_descriptor,
            access_flags: METHOD_ACCESS_FLAGS,
            code: CodeAttribute {
                name_index: code_name,
                max_stack: FIXED_STACK_AND_LOCALS,
                max_locals: FIXED_STACK_AND_LOCALS,
                code,
            },
        });
        Ok(())
    }
}
