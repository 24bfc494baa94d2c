// parser/src/lib.rs
//
// Front half of the DRS → FOL pipeline:
//   1. Lex (Logos DFA, whitespace-delimited words)
//   2. Classify (keyword tables + shape rules, fixed precedence)
//
// The translator in `drs-semantics` consumes the classified stream.

pub mod classifier;
pub mod lexer;
pub mod lexicon;

pub use classifier::{classify, classify_all, Token, TokenKind};
pub use lexer::{tokenize, Lexeme};
pub use lexicon::Connective;

/// Lex and classify a DRS string in one call.
pub fn parse_tokens(input: &str) -> Vec<Token<'_>> {
    classify_all(tokenize(input))
}
