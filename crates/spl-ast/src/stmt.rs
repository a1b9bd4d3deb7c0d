use spl_lex::Token;
use spl_util::Result;

use crate::ast::AstNode;
use crate::Parser;

impl Parser {
    pub(crate) fn statement(&mut self) -> Result<AstNode> {
        if matches!(self.current(), Token::OpenSqBracket) {
            self.stagecontrol()
        } else {
            self.speech()
        }
    }

    fn stagecontrol(&mut self) -> Result<AstNode> {
        self.eat(&Token::OpenSqBracket, "\"[\"")?;
        match self.current() {
            Token::Enter => self.enter()?,
            Token::Exit => self.exit()?,
            Token::Exeunt => self.exeunt()?,
            _ => return Err(self.unexpected("Enter, Exit, or Exeunt")),
        }
        self.eat(&Token::CloseSqBracket, "\"]\"")?;
        Ok(AstNode::NoOp)
    }

    fn enter(&mut self) -> Result<()> {
        self.eat(&Token::Enter, "\"Enter\"")?;
        let name = self.eat_name()?;
        self.state.enter(&name)?;
        while matches!(self.current(), Token::Add) {
            self.bump();
            let name = self.eat_name()?;
            self.state.enter(&name)?;
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.eat(&Token::Exit, "\"Exit\"")?;
        let name = self.eat_name()?;
        self.state.exit(&name)?;
        while matches!(self.current(), Token::Add) {
            self.bump();
            let name = self.eat_name()?;
            self.state.exit(&name)?;
        }
        Ok(())
    }

    fn exeunt(&mut self) -> Result<()> {
        self.eat(&Token::Exeunt, "\"Exeunt\"")?;
        self.state.exeunt();
        Ok(())
    }

    fn speech(&mut self) -> Result<AstNode> {
        let name = self.eat_name()?;
        self.state.require_onstage(&name)?;
        self.eat(&Token::Colon, "\":\"")?;
        self.state.speaking = Some(name);
        let body = self.body();
        self.state.speaking = None;
        body
    }

    fn body(&mut self) -> Result<AstNode> {
        match self.current().clone() {
            Token::Print(as_char) => {
                self.bump();
                self.eat(&Token::EndLine, "\".\" or \"!\"")?;
                Ok(AstNode::PrintVariable {
                    field: self.state.addressee()?,
                    as_char,
                })
            }
            Token::Input(as_char) => {
                self.bump();
                self.eat(&Token::EndLine, "\".\" or \"!\"")?;
                Ok(AstNode::InputVariable {
                    field: self.state.addressee()?,
                    as_char,
                })
            }
            Token::Goto => {
                self.bump();
                let target = self.goto_target()?;
                self.eat(&Token::EndLine, "\".\" or \"!\"")?;
                Ok(AstNode::Goto(target))
            }
            Token::IfSo => {
                self.bump();
                self.eat(&Token::Comma, "\",\"")?;
                self.eat(&Token::Goto, "a goto phrase")?;
                let target = self.goto_target()?;
                self.eat(&Token::EndLine, "\".\" or \"!\"")?;
                Ok(AstNode::ConditionalGoto(target))
            }
            Token::QuestionStart => {
                self.bump();
                let left = self.character_name()?;
                let right = self.character_name()?;
                self.eat(&Token::QuestionMark, "\"?\"")?;
                Ok(AstNode::Compare { left, right })
            }
            _ => {
                let target = self.character_name()?;
                let expr = self.expr()?;
                Ok(AstNode::Assign {
                    var: target,
                    expr: Box::new(expr),
                    static_decl: false,
                })
            }
        }
    }

    /// `Act Numeral` or `Scene Numeral`, resolved to a flattener label name.
    fn goto_target(&mut self) -> Result<String> {
        match self.current() {
            Token::Act => {
                self.bump();
                let n = self.eat_numeral()?;
                Ok(format!("act {n}"))
            }
            Token::Scene => {
                self.bump();
                let n = self.eat_numeral()?;
                Ok(format!("act {} scene {}", self.state.current_act, n))
            }
            _ => Err(self.unexpected("\"act\" or \"scene\"")),
        }
    }
}
