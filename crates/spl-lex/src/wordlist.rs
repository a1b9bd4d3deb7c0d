//! Word lists for character names, nouns, and adjectives.
//!
//! Shipped as plain-text data files, one lowercase word per line, blank
//! lines skipped, embedded into the binary at compile time.

const CHARACTERS: &str = include_str!("../data/characters.txt");
const NOUNS: &str = include_str!("../data/nouns.txt");
const NEGATIVE_NOUNS: &str = include_str!("../data/negative_nouns.txt");
const ADJECTIVES: &str = include_str!("../data/adjectives.txt");

/// The four disjoint word lists the lexer draws on to recognize character
/// names, adjectives, and positive/negative nouns.
#[derive(Clone, Debug)]
pub struct WordLists {
    pub characters: Vec<String>,
    pub nouns: Vec<String>,
    pub negative_nouns: Vec<String>,
    pub adjectives: Vec<String>,
}

fn parse_list(text: &str) -> Vec<String> {
    let mut words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
        .collect();
    // Longest entries first so multi-word names (e.g. "lady macbeth") take
    // priority over a shorter prefix match (e.g. "lady montague" vs "lady").
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    words
}

impl WordLists {
    /// Load the word lists shipped with the compiler.
    pub fn embedded() -> Self {
        Self {
            characters: parse_list(CHARACTERS),
            nouns: parse_list(NOUNS),
            negative_nouns: parse_list(NEGATIVE_NOUNS),
            adjectives: parse_list(ADJECTIVES),
        }
    }
}
