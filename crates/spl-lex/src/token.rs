/// A single lexical unit produced by the [`Lexer`](crate::Lexer).
///
/// Carries the payload the parser needs and nothing else: integer values for
/// nouns/adjectives, interned text for names/numerals/gotos, and a flag for
/// the char-vs-integer mode of `Print`/`Input`.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Act,
    Scene,
    /// Roman numeral text, lowercased (e.g. `"iii"`).
    Numeral(String),
    /// A declared character's name, as matched from the character word list.
    Name(String),
    /// A noun's value: `+1` for a positive noun, `-1` for a negative one.
    Noun(i32),
    /// An adjective; always doubles (value fixed at 2 in the grammar).
    Adj(i32),
    /// `with` / `and` connective. The operator is always `+`.
    Add,
    /// `.` or `!`
    EndLine,
    QuestionMark,
    Comma,
    Colon,
    OpenSqBracket,
    CloseSqBracket,
    /// `you` / `thyself`
    SecondPronoun,
    /// `i ` / `myself`
    FirstPronoun,
    Enter,
    Exit,
    Exeunt,
    /// `speak your mind` (char) / `open your heart` (int)
    Print(bool),
    /// `open your mind` (char) / `listen to your heart` (int)
    Input(bool),
    /// `let us proceed to` / `let us return to`
    Goto,
    IfSo,
    /// Lookahead-only match of `(are|is|am)`, introducing a comparison.
    QuestionStart,
    /// Unrecognized character; suppressed before reaching the parser.
    NoOp,
    Eof,
}

impl Token {
    pub fn is_noop(&self) -> bool {
        matches!(self, Token::NoOp)
    }
}
