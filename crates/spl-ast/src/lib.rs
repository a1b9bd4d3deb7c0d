//! Context-sensitive parser for SPL: turns a [`spl_lex::Token`] sequence
//! into an [`AstNode`] tree rooted at `Label("play", ...)`.

mod ast;
mod expr;
mod roman;
mod state;
mod stmt;
#[cfg(test)]
mod tests;

pub use ast::{AstNode, Operator};

use std::mem::discriminant;

use spl_lex::{Lexer, Spanned, Token};
use spl_util::{CompilerError, Result, Span};

use roman::roman_to_u32;
use state::StageState;

/// Recursive-descent parser over a fully-materialized token stream.
///
/// The token sequence produced by the lexer is finite (§5: single-threaded,
/// consumed strictly once), so collecting it up front keeps every
/// production a plain, backtracking-free function over an index cursor.
pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    state: StageState,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        let tokens: Vec<Spanned> = Lexer::new(source).collect();
        Self {
            tokens,
            pos: 0,
            state: StageState::default(),
        }
    }

    pub fn parse(source: &str) -> Result<AstNode> {
        let mut parser = Self::new(source);
        parser.play()
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos].token
    }

    fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    fn at_end(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }

    fn bump(&mut self) -> Spanned {
        let spanned = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        spanned
    }

    fn unexpected(&self, expected: &str) -> CompilerError {
        CompilerError::syntax_at(
            format!("expected {expected}, found {:?}", self.current()),
            self.current_span(),
        )
    }

    /// Consumes the current token if its variant matches `want`, ignoring
    /// any payload carried by either side.
    fn eat(&mut self, want: &Token, expected: &str) -> Result<()> {
        if discriminant(self.current()) == discriminant(want) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn eat_name(&mut self) -> Result<String> {
        match self.current().clone() {
            Token::Name(name) => {
                self.bump();
                Ok(name)
            }
            _ => Err(self.unexpected("a name")),
        }
    }

    fn eat_numeral(&mut self) -> Result<u32> {
        match self.current().clone() {
            Token::Numeral(text) => {
                self.bump();
                roman_to_u32(&text)
            }
            _ => Err(self.unexpected("a roman numeral")),
        }
    }

    /// Skips tokens up to and including the next `EndLine`, used for the
    /// play preamble and the free-text title lines following `Act N:` /
    /// `Scene N:`.
    fn skip_to_endline(&mut self) {
        while !matches!(self.current(), Token::EndLine | Token::Eof) {
            self.bump();
        }
        if matches!(self.current(), Token::EndLine) {
            self.bump();
        }
    }

    fn play(&mut self) -> Result<AstNode> {
        self.skip_to_endline();

        let mut children = Vec::new();
        while matches!(self.current(), Token::Name(_)) {
            children.push(self.var_assignment()?);
        }

        if matches!(self.current(), Token::Eof) {
            return Err(self.unexpected("at least one act"));
        }
        while !self.at_end() {
            children.push(self.act()?);
        }

        Ok(AstNode::Label {
            name: "play".to_string(),
            children,
        })
    }

    fn var_assignment(&mut self) -> Result<AstNode> {
        let name = self.eat_name()?;
        self.state.declare(&name)?;
        self.eat(&Token::Comma, "\",\"")?;
        let expr = self.expr()?;
        Ok(AstNode::Assign {
            var: name,
            expr: Box::new(expr),
            static_decl: true,
        })
    }

    fn act(&mut self) -> Result<AstNode> {
        self.eat(&Token::Act, "\"Act\"")?;
        self.state.current_act = self.eat_numeral()?;
        self.state.current_scene = 0;
        self.eat(&Token::Colon, "\":\"")?;
        self.skip_to_endline();

        let mut children = Vec::new();
        while matches!(self.current(), Token::Scene) {
            children.push(self.scene()?);
        }
        if children.is_empty() {
            return Err(self.unexpected("at least one scene"));
        }

        Ok(AstNode::Label {
            name: self.state.act_label(),
            children,
        })
    }

    fn scene(&mut self) -> Result<AstNode> {
        self.eat(&Token::Scene, "\"Scene\"")?;
        self.state.current_scene = self.eat_numeral()?;
        self.eat(&Token::Colon, "\":\"")?;
        self.skip_to_endline();

        let mut children = Vec::new();
        while !matches!(self.current(), Token::Act | Token::Scene | Token::Eof) {
            children.push(self.statement()?);
        }
        self.state.require_scene_empty()?;

        Ok(AstNode::Label {
            name: self.state.scene_label(),
            children,
        })
    }
}
