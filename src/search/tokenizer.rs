//! Text Processing
//!
//! Tokenization shared by index building and querying. The rules here are the only
//! path into both sides, so they cannot drift apart; changing them requires a full
//! index rebuild.
//!
//! Normalization: lowercase, fold common Latin diacritics (including the Romanian
//! cedilla/comma-below equivalence), strip punctuation, then apply a minimal suffix
//! stemmer. Numerals are kept and there is no stop-word list: short words carry
//! weight in this corpus.

use std::sync::OnceLock;

use regex::Regex;

/// A term occurrence with its byte span in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub term: String,
    pub start: usize,
    pub end: usize,
}

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern compiles"))
}

/// Fold one lowercased character to its unaccented base.
fn fold_char(c: char) -> char {
    match c {
        'ă' | 'â' | 'á' | 'à' | 'ä' | 'å' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ș' | 'ş' => 's',
        'ț' | 'ţ' => 't',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

/// Lowercase and fold diacritics, preserving everything else.
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect()
}

/// Minimal uniform suffix stemmer.
///
/// Strips plural and archaic verb endings: `ies` -> `y` (enemies -> enemy), `eth`
/// (walketh -> walk), and a trailing `s` that is not part of `ss`. Short stems are
/// left alone so words like "his" and "was" survive intact.
pub fn stem(term: &str) -> String {
    if let Some(base) = term.strip_suffix("ies") {
        if base.len() >= 2 {
            return format!("{base}y");
        }
    }
    if let Some(base) = term.strip_suffix("eth") {
        if base.len() >= 3 {
            return base.to_string();
        }
    }
    if let Some(base) = term.strip_suffix('s') {
        if base.len() >= 3 && !term.ends_with("ss") {
            return base.to_string();
        }
    }
    term.to_string()
}

fn normalize_word(word: &str) -> Option<String> {
    let folded = fold_diacritics(word);
    if folded.is_empty() {
        return None;
    }
    Some(stem(&folded))
}

/// Tokenize verse text, keeping each term's byte span in the raw input so matches
/// can be highlighted later.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    word_pattern()
        .find_iter(text)
        .filter_map(|m| {
            normalize_word(m.as_str()).map(|term| Token {
                term,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

/// Tokenize a query string into normalized terms, preserving order and duplicates.
pub fn tokenize_query(query: &str) -> Vec<String> {
    word_pattern()
        .find_iter(query)
        .filter_map(|m| normalize_word(m.as_str()))
        .collect()
}
