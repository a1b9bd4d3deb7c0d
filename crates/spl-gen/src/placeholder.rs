/// One entry of the builder's instruction buffer: either real encoded
/// bytes, or a placeholder the resolver replaces in a second pass.
///
/// The placeholder lengths are the contract the whole two-pass scheme
/// depends on: a `Label` must report the same length as the `nop` it is
/// eventually replaced with, an unconditional `Jump` the same length as
/// `goto_w`, and a conditional `Jump` the same length as `ifeq`. Getting
/// this wrong produces offsets that are correct only in the placeholder
/// pass and wrong once concrete bytes are substituted.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Bytes(Vec<u8>),
    Label(String),
    Jump { target: String, conditional: bool },
}

impl Item {
    pub fn len(&self) -> usize {
        match self {
            Item::Bytes(bytes) => bytes.len(),
            Item::Label(_) => 1,
            Item::Jump {
                conditional: true, ..
            } => 3,
            Item::Jump {
                conditional: false, ..
            } => 5,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
