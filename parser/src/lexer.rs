use logos::Logos;

/// Lexical shape of one whitespace-delimited DRS word.
///
/// `Word` is a catch-all: every run of non-whitespace characters becomes
/// exactly one token, so the lexer never errors and never splits a word.
/// The two narrower shapes win ties against `Word` by priority.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Lexeme {
    // Scope markers: `<1` opens a deferred box, `>N` is never consumed.
    #[regex(r"[<>][0-9]+", priority = 3)]
    BoxMarker,

    // Signed offsets: `-1` (previous entity), `+2` (second-next entity).
    #[regex(r"[+-][0-9]+", priority = 3)]
    Offset,

    // Predicates, keywords, roles, comparison symbols, constants.
    #[regex(r"[^\s]+", priority = 1)]
    Word,
}

/// Tokenizer wrapper that yields zero-copy string slices paired with their shape.
pub fn tokenize(input: &str) -> Vec<(Lexeme, &str)> {
    let mut lex = Lexeme::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lex.next() {
        // Word matches every non-whitespace run, so Err never occurs.
        if let Ok(lexeme) = result {
            tokens.push((lexeme, lex.slice()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
    }

    #[test]
    fn splits_on_whitespace_runs() {
        let tokens = tokenize("plant.n.02   NEGATION\t<1\nbe.v.01");
        let words: Vec<&str> = tokens.iter().map(|(_, s)| *s).collect();
        assert_eq!(words, vec!["plant.n.02", "NEGATION", "<1", "be.v.01"]);
    }

    #[test]
    fn splits_on_unicode_whitespace() {
        let tokens = tokenize("a.n.01\u{2003}b.n.01\u{00A0}Theme\u{3000}-1");
        let words: Vec<&str> = tokens.iter().map(|(_, s)| *s).collect();
        assert_eq!(words, vec!["a.n.01", "b.n.01", "Theme", "-1"]);
        assert_eq!(tokens[3].0, Lexeme::Offset);
    }

    #[test]
    fn box_markers_and_offsets_have_their_own_shape() {
        let tokens = tokenize("<1 >12 -1 +2");
        assert_eq!(tokens[0], (Lexeme::BoxMarker, "<1"));
        assert_eq!(tokens[1], (Lexeme::BoxMarker, ">12"));
        assert_eq!(tokens[2], (Lexeme::Offset, "-1"));
        assert_eq!(tokens[3], (Lexeme::Offset, "+2"));
    }

    #[test]
    fn marker_lookalikes_stay_whole_words() {
        // Longest match wins: the trailing letter keeps these as one Word each.
        let tokens = tokenize("<1x -1b +");
        assert_eq!(tokens[0], (Lexeme::Word, "<1x"));
        assert_eq!(tokens[1], (Lexeme::Word, "-1b"));
        assert_eq!(tokens[2], (Lexeme::Word, "+"));
    }

    #[test]
    fn unicode_comparison_symbols_are_words() {
        let tokens = tokenize("≠ ≈ ≤ ≥ =");
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|(lexeme, _)| *lexeme == Lexeme::Word));
        assert_eq!(tokens[0].1, "≠");
    }

    #[test]
    fn quoted_constants_are_not_split() {
        let tokens = tokenize("person.n.01 Name \"tom\"");
        assert_eq!(tokens[2], (Lexeme::Word, "\"tom\""));
    }
}
