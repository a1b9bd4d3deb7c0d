/// The `Code` attribute (JVMS §4.7.3): max_stack/max_locals are fixed at
/// 32768 per the behavioral contract this compiler targets (see
/// `spl-gen`'s builder for why that placeholder is kept rather than
/// computed by abstract interpretation).
#[derive(Clone, Debug, PartialEq)]
pub struct CodeAttribute {
    pub name_index: u16,
    pub max_stack: u16,
    pub max_locals: u16,
    pub code: Vec<u8>,
}

pub const FIXED_STACK_AND_LOCALS: u16 = 32768;

/// A method entry. This compiler only ever emits one: `main`.
#[derive(Clone, Debug, PartialEq)]
pub struct Method {
    pub name_index: u16,
    pub descriptor_index: u16,
    pub access_flags: u16,
    pub code: CodeAttribute,
}
