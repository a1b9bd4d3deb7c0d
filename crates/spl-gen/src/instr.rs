//! Raw bytecode encoding for the handful of JVM instructions this compiler
//! ever emits (JVMS §6.5). Each function returns the exact bytes for one
//! instruction; callers are responsible for ordering.

use spl_util::{CompilerError, Result};

pub const NOP: u8 = 0x00;
pub const GOTO_W: u8 = 0xC8;
pub const IFEQ: u8 = 0x99;

pub fn nop() -> Vec<u8> {
    vec![NOP]
}

/// Prefers the compact one-byte forms (`iconst_m1`, `iconst_0..5`) and
/// falls back to `bipush` for anything else representable in a signed
/// byte. This compiler never emits a pool-backed `Integer` constant (see
/// the constant pool's reserved-but-unused tag kinds), so a literal
/// outside `i8` range is a compilation error rather than a wider push.
pub fn push_int(value: i32) -> Result<Vec<u8>> {
    let byte = match value {
        -1 => return Ok(vec![0x02]),
        0..=5 => return Ok(vec![0x03 + value as u8]),
        v if (-128..=127).contains(&v) => v as i8,
        v => {
            return Err(CompilerError::compilation(format!(
                "integer literal {v} is outside the range this compiler can push (-128..=127)"
            )))
        }
    };
    Ok(vec![0x10, byte as u8])
}

pub fn swap() -> Vec<u8> {
    vec![0x5F]
}

pub fn iadd() -> Vec<u8> {
    vec![0x60]
}

pub fn imul() -> Vec<u8> {
    vec![0x68]
}

pub fn i2c() -> Vec<u8> {
    vec![0x92]
}

pub fn i2l() -> Vec<u8> {
    vec![0x85]
}

pub fn lcmp() -> Vec<u8> {
    vec![0x94]
}

pub fn return_void() -> Vec<u8> {
    vec![0xB1]
}

pub fn getstatic(index: u16) -> Vec<u8> {
    with_u2(0xB2, index)
}

pub fn putstatic(index: u16) -> Vec<u8> {
    with_u2(0xB3, index)
}

pub fn invokevirtual(index: u16) -> Vec<u8> {
    with_u2(0xB6, index)
}

pub fn invokestatic(index: u16) -> Vec<u8> {
    with_u2(0xB8, index)
}

/// Prefers the compact `aload_0..3` forms.
pub fn aload(index: u8) -> Vec<u8> {
    if index <= 3 {
        vec![0x2A + index]
    } else {
        vec![0x19, index]
    }
}

pub fn aaload() -> Vec<u8> {
    vec![0x32]
}

/// Placeholder-free forms of the two final jump encodings. Only used by
/// the resolver once a concrete offset is known; see `placeholder.rs` for
/// the two-pass accounting that guarantees these lengths match what was
/// budgeted during emission.
pub fn ifeq(offset: i16) -> Vec<u8> {
    let mut out = vec![IFEQ];
    out.extend(offset.to_be_bytes());
    out
}

pub fn goto_w(offset: i32) -> Vec<u8> {
    let mut out = vec![GOTO_W];
    out.extend(offset.to_be_bytes());
    out
}

fn with_u2(opcode: u8, index: u16) -> Vec<u8> {
    let mut out = vec![opcode];
    out.extend(index.to_be_bytes());
    out
}
