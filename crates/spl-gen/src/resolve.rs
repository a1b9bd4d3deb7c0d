use std::collections::HashMap;

use spl_util::{CompilerError, Result};

use crate::instr;
use crate::placeholder::Item;

/// Two-pass resolution of labels and jumps into concrete bytecode.
///
/// Pass 1 records each label's byte offset using the placeholder lengths
/// (stable because they match the eventual real encodings byte for byte).
/// Pass 2 replaces labels with `nop` and jumps with `ifeq`/`goto_w` carrying
/// the offset from the jump instruction's own position to its target.
pub fn resolve(items: &[Item]) -> Result<Vec<u8>> {
    let mut offsets = Vec::with_capacity(items.len());
    let mut pos = 0usize;
    for item in items {
        offsets.push(pos);
        pos += item.len();
    }

    let mut labels: HashMap<&str, usize> = HashMap::new();
    for (item, &offset) in items.iter().zip(&offsets) {
        if let Item::Label(name) = item {
            labels.insert(name.as_str(), offset);
        }
    }

    let mut out = Vec::with_capacity(pos);
    for (item, &offset) in items.iter().zip(&offsets) {
        match item {
            Item::Bytes(bytes) => out.extend(bytes),
            Item::Label(_) => out.extend(instr::nop()),
            Item::Jump { target, conditional } => {
                let target_offset = *labels.get(target.as_str()).ok_or_else(|| {
                    CompilerError::compilation(format!("unresolved jump target \"{target}\""))
                })?;
                let delta = target_offset as i64 - offset as i64;
                if *conditional {
                    let delta16 = i16::try_from(delta).map_err(|_| {
                        CompilerError::compilation(format!(
                            "jump offset {delta} does not fit a conditional jump's 16-bit offset"
                        ))
                    })?;
                    out.extend(instr::ifeq(delta16));
                } else {
                    let delta32 = i32::try_from(delta).map_err(|_| {
                        CompilerError::compilation(format!(
                            "jump offset {delta} does not fit a 32-bit offset"
                        ))
                    })?;
                    out.extend(instr::goto_w(delta32));
                }
            }
        }
    }
    Ok(out)
}
