//! JVM access flag bits (JVMS §4.1, §4.5, §4.6). Only the subset this
//! compiler ever emits.

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_SUPER: u16 = 0x0020;

pub const CLASS_ACCESS_FLAGS: [u16; 2] = [ACC_PUBLIC, ACC_SUPER];
pub const FIELD_ACCESS_FLAGS: u16 = ACC_PUBLIC | ACC_STATIC;
pub const METHOD_ACCESS_FLAGS: u16 = ACC_PUBLIC | ACC_STATIC;

/// The class-level access flags are recorded as a set and combined with
/// XOR rather than OR; harmless here since the bits are disjoint, but kept
/// faithful to how the reference implementation assembles them.
pub fn fold_class_access_flags(flags: &[u16]) -> u16 {
    flags.iter().fold(0, |acc, f| acc ^ f)
}
