use std::collections::HashMap;

use spl_util::{CompilerError, Result};

const TAG_UTF8: u8 = 1;
const TAG_CLASS: u8 = 7;
const TAG_FIELDREF: u8 = 9;
const TAG_METHODREF: u8 = 10;
const TAG_NAME_AND_TYPE: u8 = 12;

// Reserved but never emitted by this compiler: Integer(3), Float(4),
// Long(5), Double(6), String(8), InterfaceMethodref(11), MethodHandle(15),
// MethodType(16), InvokeDynamic(18).

/// A single constant pool entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Entry {
    Utf8(String),
    Class { name_index: u16 },
    NameAndType { name_index: u16, descriptor_index: u16 },
    FieldRef { class_index: u16, name_and_type_index: u16 },
    MethodRef { class_index: u16, name_and_type_index: u16 },
}

impl Entry {
    /// The bytes that would appear in the class file for this entry,
    /// including its leading tag byte. Constant pool deduplication is
    /// defined in terms of this encoding, not structural equality.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match self {
            Entry::Utf8(text) => {
                out.push(TAG_UTF8);
                let bytes = modified_utf8(text)?;
                out.extend((bytes.len() as u16).to_be_bytes());
                out.extend(bytes);
            }
            Entry::Class { name_index } => {
                out.push(TAG_CLASS);
                out.extend(name_index.to_be_bytes());
            }
            Entry::NameAndType {
                name_index,
                descriptor_index,
            } => {
                out.push(TAG_NAME_AND_TYPE);
                out.extend(name_index.to_be_bytes());
                out.extend(descriptor_index.to_be_bytes());
            }
            Entry::FieldRef {
                class_index,
                name_and_type_index,
            } => {
                out.push(TAG_FIELDREF);
                out.extend(class_index.to_be_bytes());
                out.extend(name_and_type_index.to_be_bytes());
            }
            Entry::MethodRef {
                class_index,
                name_and_type_index,
            } => {
                out.push(TAG_METHODREF);
                out.extend(class_index.to_be_bytes());
                out.extend(name_and_type_index.to_be_bytes());
            }
        }
        Ok(out)
    }
}

/// Rejects the single-byte forms the target VM reserves for modified-UTF8
/// special handling (JVMS §4.4.7): byte 0 and the 0xF0-0xFF range.
fn modified_utf8(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    for byte in text.bytes() {
        if byte == 0 || (0xF0..=0xFF).contains(&byte) {
            return Err(CompilerError::encoding(format!(
                "character with byte code {byte} is not allowed in a class file Utf8 entry"
            )));
        }
        out.push(byte);
    }
    Ok(out)
}

/// The deduplicated, insertion-ordered, 1-indexed constant pool.
#[derive(Debug, Default)]
pub struct ConstantPool {
    entries: Vec<Entry>,
    by_bytes: HashMap<Vec<u8>, u16>,
    pub this_index: u16,
    pub this_utf8_index: u16,
    pub super_index: u16,
    pub super_utf8_index: u16,
}

impl ConstantPool {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Appends `entry`, returning its 1-based index. If an entry with
    /// identical encoded bytes already exists, returns its index instead
    /// and leaves the pool unchanged.
    pub fn add(&mut self, entry: Entry) -> Result<u16> {
        let bytes = entry.encode()?;
        if let Some(&index) = self.by_bytes.get(&bytes) {
            return Ok(index);
        }
        self.entries.push(entry);
        let index = self.entries.len() as u16;
        self.by_bytes.insert(bytes, index);
        Ok(index)
    }

    fn add_class(&mut self, name: &str) -> Result<u16> {
        let utf8 = self.add(Entry::Utf8(name.to_string()))?;
        self.add(Entry::Class { name_index: utf8 })
    }

    fn add_name_and_type(&mut self, name: &str, descriptor: &str) -> Result<u16> {
        let name_index = self.add(Entry::Utf8(name.to_string()))?;
        let descriptor_index = self.add(Entry::Utf8(descriptor.to_string()))?;
        self.add(Entry::NameAndType {
            name_index,
            descriptor_index,
        })
    }

    pub fn add_method_ref(&mut self, class_name: &str, name: &str, descriptor: &str) -> Result<u16> {
        let class_index = self.add_class(class_name)?;
        let nat_index = self.add_name_and_type(name, descriptor)?;
        self.add(Entry::MethodRef {
            class_index,
            name_and_type_index: nat_index,
        })
    }

    pub fn add_field_ref(&mut self, class_name: &str, name: &str, descriptor: &str) -> Result<u16> {
        let class_index = self.add_class(class_name)?;
        let nat_index = self.add_name_and_type(name, descriptor)?;
        self.add(Entry::FieldRef {
            class_index,
            name_and_type_index: nat_index,
        })
    }

    /// Pre-populates the pool with `this`/`super` class references.
    pub fn generate_default(this_class: &str, super_class: &str) -> Result<Self> {
        let mut pool = ConstantPool::default();
        pool.this_utf8_index = pool.add(Entry::Utf8(this_class.to_string()))?;
        pool.this_index = pool.add(Entry::Class {
            name_index: pool.this_utf8_index,
        })?;
        pool.super_utf8_index = pool.add(Entry::Utf8(super_class.to_string()))?;
        pool.super_index = pool.add(Entry::Class {
            name_index: pool.super_utf8_index,
        })?;
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_entries_return_the_existing_index() {
        let mut pool = ConstantPool::default();
        let a = pool.add(Entry::Utf8("flower".to_string())).unwrap();
        let b = pool.add(Entry::Utf8("flower".to_string())).unwrap();
        assert_eq!(a, b);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn distinct_entries_get_distinct_indices() {
        let mut pool = ConstantPool::default();
        let a = pool.add(Entry::Utf8("romeo".to_string())).unwrap();
        let b = pool.add(Entry::Utf8("juliet".to_string())).unwrap();
        assert_ne!(a, b);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn generate_default_populates_this_and_super() {
        let pool = ConstantPool::generate_default("SplProgram", "java/lang/Object").unwrap();
        assert_eq!(pool.len(), 4);
        assert_ne!(pool.this_index, 0);
        assert_ne!(pool.super_index, 0);
    }

    #[test]
    fn rejects_null_byte_in_utf8_entry() {
        let mut pool = ConstantPool::default();
        let err = pool.add(Entry::Utf8("a\u{0}b".to_string())).unwrap_err();
        assert!(matches!(err, CompilerError::Encoding(_)));
    }

    #[test]
    fn add_field_ref_reuses_shared_class_entry() {
        let mut pool = ConstantPool::default();
        let r1 = pool.add_field_ref("SplProgram", "x", "I").unwrap();
        let r2 = pool.add_field_ref("SplProgram", "y", "I").unwrap();
        assert_ne!(r1, r2);
        // Exactly one Utf8("SplProgram") and one Class entry should exist.
        let class_entries = pool
            .iter()
            .filter(|e| matches!(e, Entry::Class { .. }))
            .count();
        assert_eq!(class_entries, 1);
    }
}
