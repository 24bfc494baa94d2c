//! Static keyword tables for the DRS vocabulary.
//!
//! Connectives, thematic roles and comparison keywords are closed sets, so
//! they live in compile-time `phf` tables rather than chains of string
//! comparisons. Lookups are exact and case-sensitive.

use phf::{phf_map, phf_set};

/// Discourse connectives between boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    Negation,
    Conjunction,
    Explanation,
    Continuation,
}

impl Connective {
    /// FOL operator emitted after the joining `&`.
    ///
    /// `EXPLANATION` and `CONTINUATION` have no operator of their own; only
    /// the `&` survives for them.
    pub fn operator(self) -> Option<&'static str> {
        match self {
            Connective::Negation => Some("NOT"),
            Connective::Conjunction => Some("CON"),
            Connective::Explanation | Connective::Continuation => None,
        }
    }
}

static CONNECTIVES: phf::Map<&'static str, Connective> = phf_map! {
    "NEGATION" => Connective::Negation,
    "CONJUNCTION" => Connective::Conjunction,
    "EXPLANATION" => Connective::Explanation,
    "CONTINUATION" => Connective::Continuation,
};

// Binary thematic roles: `Role(owner, target)`.
static ROLES: phf::Set<&'static str> = phf_set! {
    "Agent",
    "Theme",
    "Patient",
    "Co-Theme",
    "Co-Agent",
    "Co-Patient",
    "Attribute",
    "Beneficiary",
    "Bearer",
    "Causer",
    "Colour",
    "Content",
    "Creator",
    "Degree",
    "Destination",
    "Duration",
    "Experiencer",
    "Extent",
    "Frequency",
    "Goal",
    "Instance",
    "Instrument",
    "Location",
    "Manner",
    "Material",
    "Name",
    "Of",
    "Owner",
    "Part",
    "Pivot",
    "Product",
    "Quantity",
    "Recipient",
    "Result",
    "Role",
    "Source",
    "Stimulus",
    "Sub",
    "Time",
    "Topic",
    "User",
    "Value",
};

// Comparison keywords and the infix symbol each one stands for.
static COMPARISONS: phf::Map<&'static str, &'static str> = phf_map! {
    "EQU" => "=",
    "NEQ" => "≠",
    "APX" => "≈",
    "LEQ" => "≤",
};

/// First characters that make a token a comparison operator on their own.
pub const COMPARISON_SYMBOLS: [char; 5] = ['=', '≠', '≈', '≤', '≥'];

pub fn connective(word: &str) -> Option<Connective> {
    CONNECTIVES.get(word).copied()
}

pub fn is_role(word: &str) -> bool {
    ROLES.contains(word)
}

pub fn comparison_keyword(word: &str) -> Option<&'static str> {
    COMPARISONS.get(word).copied()
}

/// Infix operator text for a comparison token: the keyword's symbol, or the
/// token itself when it is already symbolic.
pub fn comparison_operator(word: &str) -> &str {
    comparison_keyword(word).unwrap_or(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connective_operators() {
        assert_eq!(connective("NEGATION").and_then(Connective::operator), Some("NOT"));
        assert_eq!(connective("CONJUNCTION").and_then(Connective::operator), Some("CON"));
        assert_eq!(connective("EXPLANATION").map(Connective::operator), Some(None));
        assert_eq!(connective("CONTINUATION").map(Connective::operator), Some(None));
        assert_eq!(connective("negation"), None);
    }

    #[test]
    fn core_roles_are_present() {
        for role in ["Agent", "Theme", "Patient", "Co-Theme", "Time"] {
            assert!(is_role(role), "{} should be a role", role);
        }
        assert!(!is_role("theme"));
        assert!(!is_role("EQU"));
    }

    #[test]
    fn comparison_keywords_map_to_symbols() {
        assert_eq!(comparison_operator("EQU"), "=");
        assert_eq!(comparison_operator("NEQ"), "≠");
        assert_eq!(comparison_operator("APX"), "≈");
        assert_eq!(comparison_operator("LEQ"), "≤");
        assert_eq!(comparison_operator("≥"), "≥");
    }
}
