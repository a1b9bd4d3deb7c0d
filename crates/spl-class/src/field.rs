use crate::access::FIELD_ACCESS_FLAGS;
use crate::constant_pool::{ConstantPool, Entry};
use spl_util::Result;

/// A field entry: JVMS §4.5. This compiler only ever emits `I`-typed,
/// `Public|Static` fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name_index: u16,
    pub descriptor_index: u16,
    pub access_flags: u16,
}

/// Insertion-ordered, deduplicated-by-(name, descriptor) field list.
#[derive(Debug, Default)]
pub struct FieldTable {
    fields: Vec<Field>,
}

impl FieldTable {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Declares an `I`-typed field if not already present. A no-op for an
    /// already-declared field (fields are added implicitly on first
    /// reference, so repeated references must not duplicate the entry).
    pub fn declare_int_field(&mut self, name: &str, pool: &mut ConstantPool) -> Result<()> {
        let name_index = pool.add(Entry::Utf8(name.to_string()))?;
        let descriptor_index = pool.add(Entry::Utf8("I".to_string()))?;
        if self
            .fields
            .iter()
            .any(|f| f.name_index == name_index && f.descriptor_index == descriptor_index)
        {
            return Ok(());
        }
        self.fields.push(Field {
            name_index,
            descriptor_index,
            access_flags: FIELD_ACCESS_FLAGS,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_declarations_do_not_duplicate() {
        let mut pool = ConstantPool::default();
        let mut table = FieldTable::default();
        table.declare_int_field("romeo", &mut pool).unwrap();
        table.declare_int_field("romeo", &mut pool).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn distinct_names_are_distinct_fields() {
        let mut pool = ConstantPool::default();
        let mut table = FieldTable::default();
        table.declare_int_field("romeo", &mut pool).unwrap();
        table.declare_int_field("juliet", &mut pool).unwrap();
        assert_eq!(table.len(), 2);
    }
}
