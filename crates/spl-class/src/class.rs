use spl_util::{CompilerError, Result};

use crate::access::{fold_class_access_flags, CLASS_ACCESS_FLAGS};
use crate::constant_pool::ConstantPool;
use crate::field::FieldTable;
use crate::method::Method;

/// The fully-assembled, not-yet-serialized class. Built by `spl-gen`'s
/// `Builder`, consumed by this crate's `emit`.
#[derive(Debug)]
pub struct ClassFile {
    pub name: String,
    pub major_version: u16,
    pub minor_version: u16,
    pub pool: ConstantPool,
    pub fields: FieldTable,
    pub methods: Vec<Method>,
}

impl ClassFile {
    pub fn new(name: impl Into<String>, major_version: u16, minor_version: u16) -> Result<Self> {
        let name = name.into();
        let pool = ConstantPool::generate_default(&name, "java/lang/Object")?;
        Ok(Self {
            name,
            major_version,
            minor_version,
            pool,
            fields: FieldTable::default(),
            methods: Vec::new(),
        })
    }

    pub fn access_flags(&self) -> u16 {
        fold_class_access_flags(&CLASS_ACCESS_FLAGS)
    }

    /// Sanity checks run just before emission (§4.4 "Validation").
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CompilerError::compilation("class name must not be empty"));
        }
        if self.pool.is_empty() {
            return Err(CompilerError::compilation(
                "constant pool was never populated",
            ));
        }
        if self.methods.is_empty() {
            return Err(CompilerError::compilation(
                "class must declare at least one method",
            ));
        }
        Ok(())
    }
}
