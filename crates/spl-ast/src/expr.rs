use spl_lex::Token;
use spl_util::Result;

use crate::ast::{AstNode, Operator};
use crate::Parser;

impl Parser {
    /// `term ((Add | implicit-add-on-Adj) expr)?`, terminated by `EndLine`,
    /// right-associative. Mirrors the reference grammar's permissive
    /// fallback: if the continuation is neither an explicit connective nor
    /// the end of the line, it is still treated as an implicit `+` and the
    /// next `term()` call is left to reject genuinely malformed input.
    pub(crate) fn expr(&mut self) -> Result<AstNode> {
        let left = self.term()?;
        match self.current() {
            Token::Add => {
                self.bump();
                let right = self.expr()?;
                Ok(AstNode::BinaryOperator {
                    left: Box::new(left),
                    op: Operator::Add,
                    right: Box::new(right),
                })
            }
            Token::EndLine => {
                self.bump();
                Ok(left)
            }
            _ => {
                let right = self.expr()?;
                Ok(AstNode::BinaryOperator {
                    left: Box::new(left),
                    op: Operator::Add,
                    right: Box::new(right),
                })
            }
        }
    }

    /// `Adj term` (doubling) | `character_name` | `Noun`.
    fn term(&mut self) -> Result<AstNode> {
        match self.current().clone() {
            Token::Adj(_) => {
                self.bump();
                let inner = self.term()?;
                Ok(AstNode::BinaryOperator {
                    left: Box::new(AstNode::Value(2)),
                    op: Operator::Multiply,
                    right: Box::new(inner),
                })
            }
            Token::Noun(value) => {
                self.bump();
                Ok(AstNode::Value(value))
            }
            Token::Name(_) | Token::SecondPronoun | Token::FirstPronoun => {
                let name = self.character_name()?;
                Ok(AstNode::DynamicValue(name))
            }
            _ => Err(self.unexpected("a noun, adjective, or character name")),
        }
    }

    /// `Name` | `SecondPronoun` (the other on-stage character) |
    /// `FirstPronoun` (the current speaker).
    pub(crate) fn character_name(&mut self) -> Result<String> {
        match self.current() {
            Token::Name(_) => self.eat_name(),
            Token::SecondPronoun => {
                self.bump();
                self.state.addressee()
            }
            Token::FirstPronoun => {
                self.bump();
                self.state.speaker()
            }
            _ => Err(self.unexpected("a character name or pronoun")),
        }
    }
}
