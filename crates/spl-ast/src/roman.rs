use spl_util::{CompilerError, Result};

/// Converts a lowercase roman numeral built from `i`/`v`/`x` (the only
/// letters the lexer's `Numeral` pattern recognizes) into its value.
pub fn roman_to_u32(numeral: &str) -> Result<u32> {
    let values: Vec<u32> = numeral
        .chars()
        .map(|c| match c {
            'i' => Ok(1),
            'v' => Ok(5),
            'x' => Ok(10),
            other => Err(CompilerError::syntax(format!(
                "invalid roman numeral character '{other}' in \"{numeral}\""
            ))),
        })
        .collect::<Result<_>>()?;

    if values.is_empty() {
        return Err(CompilerError::syntax("empty roman numeral"));
    }

    let mut total = 0i64;
    for i in 0..values.len() {
        let cur = values[i] as i64;
        let next = values.get(i + 1).copied().unwrap_or(0) as i64;
        if cur < next {
            total -= cur;
        } else {
            total += cur;
        }
    }
    if total <= 0 {
        return Err(CompilerError::syntax(format!(
            "invalid roman numeral \"{numeral}\""
        )));
    }
    Ok(total as u32)
}
