//! The JVM class file data model (JVMS §4), its binary serialization, and
//! optional jar packaging.

mod access;
mod class;
mod constant_pool;
mod emitter;
mod field;
mod method;
mod write;

pub use access::{ACC_PUBLIC, ACC_STATIC, FIELD_ACCESS_FLAGS, METHOD_ACCESS_FLAGS};
pub use class::ClassFile;
pub use constant_pool::{ConstantPool, Entry};
pub use emitter::{class_file_name, emit};
pub use field::{Field, FieldTable};
pub use method::{CodeAttribute, Method, FIXED_STACK_AND_LOCALS};
pub use write::{write_class_file, write_jar};
