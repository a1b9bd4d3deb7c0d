//! Lowers flattened SPL IR into JVM bytecode: constant pool/field
//! management, per-node instruction emission, and two-pass jump
//! resolution.

mod builder;
mod instr;
mod placeholder;
mod resolve;

pub use builder::Builder;
