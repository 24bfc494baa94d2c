//! DRS → FOL translation.
//!
//! Pipeline, one call at a time with no shared state:
//!   1. Lex + classify (`drs-parser`)
//!   2. Forward walk emitting [`ir::Fragment`]s ([`semantic::FolTranslator`])
//!   3. Backward repair of deferred bindings ([`reconcile::reconcile`])
//!   4. Space-join into the formula string ([`assemble`])

pub mod ir;
pub mod reconcile;
pub mod semantic;

use ir::Fragment;
use semantic::FolTranslator;

/// Translate a DRS string into its FOL formula. Never fails; malformed
/// input yields a best-effort, bracket-balanced formula.
pub fn translate(drs: &str) -> String {
    assemble(&translate_fragments(drs))
}

/// Reconciled fragment sequence for a DRS string.
pub fn translate_fragments(drs: &str) -> Vec<Fragment<'_>> {
    let tokens = drs_parser::parse_tokens(drs);
    let mut fragments = FolTranslator::new().walk(&tokens);
    reconcile::reconcile(&mut fragments);
    fragments
}

pub fn assemble(fragments: &[Fragment<'_>]) -> String {
    fragments
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
