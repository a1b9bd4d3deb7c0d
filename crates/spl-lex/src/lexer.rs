use spl_util::Span;

use crate::rules::{self, Rule};
use crate::token::Token;
use crate::wordlist::WordLists;

/// A token paired with the source position it started at.
#[derive(Clone, Debug, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

/// Lazily tokenizes SPL source text.
///
/// The source is lowercased up front (the language is case-insensitive).
/// Each call to [`next_token`](Lexer::next_token) advances the cursor by
/// exactly the bytes consumed by whichever rule matched, or by one
/// character if nothing matched (emitting `Token::NoOp`). The sequence is
/// finite and ends with `Token::Eof`; `Lexer` also implements `Iterator`,
/// filtering out `NoOp`, as the restartable token stream the parser reads.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    rules: Vec<Rule>,
    done: bool,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Self::with_words(text, &WordLists::embedded())
    }

    pub fn with_words(text: &str, words: &WordLists) -> Self {
        Self {
            source: text.to_lowercase(),
            pos: 0,
            line: 1,
            column: 1,
            rules: rules::build(words),
            done: false,
        }
    }

    fn advance_position(&mut self, consumed: &str) {
        for ch in consumed.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += consumed.len();
    }

    /// Returns the next token, or `Token::Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Spanned {
        let span = Span::new(self.line, self.column);
        if self.pos >= self.source.len() {
            return Spanned {
                token: Token::Eof,
                span,
            };
        }

        let remaining = &self.source[self.pos..];
        match rules::try_match(&self.rules, remaining) {
            Some(m) => {
                let consumed = remaining[..m.consumed].to_string();
                self.advance_position(&consumed);
                Spanned { token: m.token, span }
            }
            None => {
                let ch_len = remaining.chars().next().map(char::len_utf8).unwrap_or(1);
                let consumed = remaining[..ch_len].to_string();
                self.advance_position(&consumed);
                Spanned {
                    token: Token::NoOp,
                    span,
                }
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = Spanned;

    fn next(&mut self) -> Option<Spanned> {
        if self.done {
            return None;
        }
        loop {
            let spanned = self.next_token();
            if spanned.token.is_noop() {
                continue;
            }
            if spanned.token == Token::Eof {
                self.done = true;
            }
            return Some(spanned);
        }
    }
}
