use indexmap::IndexSet;

use spl_util::{CompilerError, Result};

/// The ambient, non-grammatical context the parser threads through every
/// production: which characters exist, who is on stage, and who is
/// currently speaking. Kept as an explicit record rather than module-level
/// mutable state so the parser stays a plain recursive-descent function set.
#[derive(Debug, Default)]
pub struct StageState {
    pub vars_table: IndexSet<String>,
    pub onstage: IndexSet<String>,
    pub speaking: Option<String>,
    pub current_act: u32,
    pub current_scene: u32,
}

impl StageState {
    pub fn declare(&mut self, name: &str) -> Result<()> {
        if !self.vars_table.insert(name.to_string()) {
            return Err(CompilerError::syntax(format!(
                "character \"{name}\" is declared more than once"
            )));
        }
        Ok(())
    }

    pub fn enter(&mut self, name: &str) -> Result<()> {
        if !self.vars_table.contains(name) {
            return Err(CompilerError::syntax(format!(
                "undeclared character \"{name}\" cannot enter"
            )));
        }
        if !self.onstage.insert(name.to_string()) {
            return Err(CompilerError::syntax(format!(
                "character \"{name}\" is already on stage"
            )));
        }
        Ok(())
    }

    pub fn exit(&mut self, name: &str) -> Result<()> {
        if !self.onstage.shift_remove(name) {
            return Err(CompilerError::syntax(format!(
                "character \"{name}\" is not on stage and cannot exit"
            )));
        }
        Ok(())
    }

    pub fn exeunt(&mut self) {
        self.onstage.clear();
        self.speaking = None;
    }

    pub fn require_onstage(&self, name: &str) -> Result<()> {
        if !self.vars_table.contains(name) {
            return Err(CompilerError::syntax(format!(
                "undeclared character \"{name}\""
            )));
        }
        if !self.onstage.contains(name) {
            return Err(CompilerError::syntax(format!(
                "character \"{name}\" is not on stage"
            )));
        }
        Ok(())
    }

    pub fn require_scene_empty(&self) -> Result<()> {
        if !self.onstage.is_empty() {
            return Err(CompilerError::syntax(format!(
                "scene ends with characters still on stage: {}",
                self.onstage.iter().cloned().collect::<Vec<_>>().join(", ")
            )));
        }
        Ok(())
    }

    /// Resolves `you`/`thyself`: the unique other on-stage character.
    pub fn addressee(&self) -> Result<String> {
        if self.onstage.len() != 2 {
            return Err(CompilerError::syntax(
                "a second-person pronoun requires exactly two characters on stage",
            ));
        }
        let speaker = self.speaking.as_deref();
        self.onstage
            .iter()
            .find(|name| Some(name.as_str()) != speaker)
            .cloned()
            .ok_or_else(|| {
                CompilerError::syntax("could not resolve the addressed character")
            })
    }

    /// Resolves `I`/`myself`: the current speaker.
    pub fn speaker(&self) -> Result<String> {
        self.speaking
            .clone()
            .ok_or_else(|| CompilerError::syntax("a first-person pronoun requires a speaker"))
    }

    pub fn act_label(&self) -> String {
        format!("act {}", self.current_act)
    }

    pub fn scene_label(&self) -> String {
        format!("act {} scene {}", self.current_act, self.current_scene)
    }
}
