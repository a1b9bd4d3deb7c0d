use thiserror::Error;

use crate::Span;

/// The taxonomy of errors a compilation run can fail with, per stage.
///
/// `Display` renders as `"<kind>: <message>"`, the format the driver writes
/// to standard error; `exit_code` gives the process exit status for each kind.
#[derive(Debug, Error)]
pub enum CompilerError {
    /// Raised by the lexer or parser: unexpected token, undeclared or
    /// redeclared character, illegal stage state, illegal goto target.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Raised by the builder or jump resolver: unknown operator, unresolved
    /// jump label, invalid class state.
    #[error("compilation error: {0}")]
    Compilation(String),

    /// Raised by the binary emitter: a forbidden modified-UTF8 byte.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Input not readable, output not writable.
    #[error("io error: {0}")]
    Io(String),
}

impl CompilerError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    pub fn syntax_at(msg: impl Into<String>, span: Span) -> Self {
        Self::Syntax(format!("{} (at {})", msg.into(), span))
    }

    pub fn compilation(msg: impl Into<String>) -> Self {
        Self::Compilation(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Process exit code for this error kind, per the CLI contract:
    /// 1 = syntax error, 2 = compilation error, 3 = everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CompilerError::Syntax(_) => 1,
            CompilerError::Compilation(_) => 2,
            CompilerError::Encoding(_) | CompilerError::Io(_) => 3,
        }
    }
}

impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CompilerError>;
