//! Token classifier for the lexed DRS stream.
//!
//! Sits between the lexer and the translator, assigning every word exactly
//! one [`TokenKind`]. Rules are checked in a fixed order and the first match
//! wins:
//!
//! 1. **Connective** — `NEGATION`, `CONJUNCTION`, `EXPLANATION`, `CONTINUATION`
//! 2. **BoxMarker** — `<N` / `>N`
//! 3. **Comparison** — leading `=` `≠` `≈` `≤` `≥`, or a keyword such as `EQU`
//! 4. **Predicate** — lowercase first character, digit last character (`be.v.01`)
//! 5. **Role** — thematic role keyword (`Agent`, `Theme`, `Co-Theme`, ...)
//! 6. **RelativeOffset** — leading `+` / `-`
//! 7. **Other** — everything else (constants like `now`, unknown keywords)
//!
//! Only the first and last characters are ever inspected, so one-character
//! tokens are safe.

use crate::lexer::Lexeme;
use crate::lexicon::{self, Connective, COMPARISON_SYMBOLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Connective(Connective),
    BoxMarker,
    Comparison,
    Predicate,
    Role,
    RelativeOffset,
    Other,
}

/// A classified word, borrowing its text from the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Classify one lexed word.
pub fn classify(lexeme: Lexeme, text: &str) -> TokenKind {
    if let Some(connective) = lexicon::connective(text) {
        return TokenKind::Connective(connective);
    }

    match lexeme {
        Lexeme::BoxMarker => return TokenKind::BoxMarker,
        Lexeme::Offset => return TokenKind::RelativeOffset,
        Lexeme::Word => {}
    }

    let (first, last) = match (text.chars().next(), text.chars().next_back()) {
        (Some(first), Some(last)) => (first, last),
        _ => return TokenKind::Other,
    };

    if COMPARISON_SYMBOLS.contains(&first) || lexicon::comparison_keyword(text).is_some() {
        TokenKind::Comparison
    } else if first.is_lowercase() && last.is_ascii_digit() {
        TokenKind::Predicate
    } else if lexicon::is_role(text) {
        TokenKind::Role
    } else if first == '+' || first == '-' {
        TokenKind::RelativeOffset
    } else {
        TokenKind::Other
    }
}

/// Classify a whole lexed stream, preserving order.
pub fn classify_all<'a>(lexed: impl IntoIterator<Item = (Lexeme, &'a str)>) -> Vec<Token<'a>> {
    lexed
        .into_iter()
        .map(|(lexeme, text)| Token {
            kind: classify(lexeme, text),
            text,
        })
        .collect()
}
