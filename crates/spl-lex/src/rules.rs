use regex::Regex;

use crate::token::Token;
use crate::wordlist::WordLists;

/// What to do with the text captured by a rule's match.
enum Action {
    /// Emit this token verbatim; the matched text is discarded.
    Fixed(Token),
    /// Emit `Token::Name` with the matched text.
    Name,
    /// Emit `Token::Numeral` with the captured roman-numeral letters. The
    /// pattern requires a trailing `.`/`:` to disambiguate a numeral
    /// position, but (regex has no lookahead) only the letters themselves
    /// are consumed, leaving the punctuation for the next rule to lex.
    Numeral,
    /// Lookahead-style match: the pattern spans more than the token actually
    /// consumes. Only the first capture group's length is advanced past.
    QuestionStart,
}

pub(crate) struct Rule {
    regex: Regex,
    action: Action,
}

pub(crate) struct Match {
    pub token: Token,
    /// Number of bytes of the input this match consumes.
    pub consumed: usize,
}

fn alternation(words: &[String]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

pub(crate) fn build(words: &WordLists) -> Vec<Rule> {
    let names_alt = alternation(&words.characters);
    let first_person = "i|myself";
    let second_person = "you|thyself";

    let mut rules = Vec::new();
    let mut push = |pattern: &str, action: Action| {
        rules.push(Rule {
            regex: Regex::new(pattern).expect("rule pattern is valid"),
            action,
        });
    };

    // Keyword phrases. Longer phrases are listed before shorter ones that
    // could otherwise prefix-match (e.g. "open your heart" vs "open your mind").
    push(r"^\bact\b", Action::Fixed(Token::Act));
    push(r"^\bscene\b", Action::Fixed(Token::Scene));
    push(r"^speak your mind\b", Action::Fixed(Token::Print(true)));
    push(r"^open your heart\b", Action::Fixed(Token::Print(false)));
    push(r"^open your mind\b", Action::Fixed(Token::Input(true)));
    push(
        r"^listen to your heart\b",
        Action::Fixed(Token::Input(false)),
    );
    push(r"^let us (?:proceed|return) to\b", Action::Fixed(Token::Goto));

    // Word-list alternations: names, adjectives, positive/negative nouns.
    push(&format!(r"^\b(?:{names_alt})\b"), Action::Name);
    push(
        &format!(r"^\b(?:{})\b", alternation(&words.adjectives)),
        Action::Fixed(Token::Adj(2)),
    );
    push(
        &format!(r"^\b(?:{})\b", alternation(&words.nouns)),
        Action::Fixed(Token::Noun(1)),
    );
    push(
        &format!(r"^\b(?:{})\b", alternation(&words.negative_nouns)),
        Action::Fixed(Token::Noun(-1)),
    );

    // Connectives.
    push(r"^\b(?:with|and)\b", Action::Fixed(Token::Add));

    // Punctuation.
    push(r"^[.!]", Action::Fixed(Token::EndLine));
    push(r"^\?", Action::Fixed(Token::QuestionMark));
    push(r"^,", Action::Fixed(Token::Comma));
    push(r"^\[", Action::Fixed(Token::OpenSqBracket));
    push(r"^\]", Action::Fixed(Token::CloseSqBracket));
    push(r"^:", Action::Fixed(Token::Colon));

    // Pronouns.
    push(
        &format!(r"^\b(?:{second_person})\b"),
        Action::Fixed(Token::SecondPronoun),
    );
    push(
        &format!(r"^\b(?:{first_person})\b"),
        Action::Fixed(Token::FirstPronoun),
    );

    // Stage directions.
    push(r"^\benter\b", Action::Fixed(Token::Enter));
    push(r"^\bexit\b", Action::Fixed(Token::Exit));
    push(r"^\bexeunt\b", Action::Fixed(Token::Exeunt));

    push(r"^\bif\s+so\b", Action::Fixed(Token::IfSo));

    // Roman numeral, introduced by a space and followed by "." or ":"
    // (e.g. the "I" in "ACT I:"). The trailing class requires a numeral
    // position rather than a bare " i" elsewhere in the prose, but only
    // the letters are consumed -- the "." or ":" is re-lexed normally.
    push(r"^ ([ivx]+)[.:]", Action::Numeral);

    // Comparison preamble. The pattern spans the whole "are X equal to Y?"
    // phrase to disambiguate from ordinary prose, but only the verb itself
    // is consumed here -- the names/pronouns and "?" are lexed normally by
    // the rules above on subsequent calls.
    push(
        &format!(
            r"^(are|is|am)\s+(?:{first_person}|{second_person}|{names_alt})\s*equal\s*to\s*(?:{first_person}|{second_person}|{names_alt})?\?"
        ),
        Action::QuestionStart,
    );

    rules
}

pub(crate) fn try_match(rules: &[Rule], remaining: &str) -> Option<Match> {
    for rule in rules {
        if let Some(caps) = rule.regex.captures(remaining) {
            let whole = caps.get(0).unwrap();
            debug_assert_eq!(whole.start(), 0);
            let token = match &rule.action {
                Action::Fixed(tok) => tok.clone(),
                Action::Name => Token::Name(caps.get(0).unwrap().as_str().to_string()),
                Action::Numeral => {
                    Token::Numeral(caps.get(1).unwrap().as_str().to_string())
                }
                Action::QuestionStart => Token::QuestionStart,
            };
            let consumed = match &rule.action {
                // Advance only to the end of capture group 1, not the whole
                // match -- trailing context (Numeral's "." / ":", QuestionStart's
                // rest of the phrase) is left for the next rule to lex normally.
                Action::QuestionStart | Action::Numeral => caps.get(1).unwrap().end(),
                _ => whole.as_str().len(),
            };
            return Some(Match { token, consumed });
        }
    }
    None
}
