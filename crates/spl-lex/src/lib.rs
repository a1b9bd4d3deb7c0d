//! Lexical analysis for SPL: turns lowercased play text into a finite,
//! lazily-produced sequence of [`Token`]s terminated by `Token::Eof`.

mod lexer;
mod rules;
#[cfg(test)]
mod tests;
mod token;
mod wordlist;

pub use lexer::{Lexer, Spanned};
pub use token::Token;
pub use wordlist::WordLists;
