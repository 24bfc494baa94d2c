//! Deferred-binding repair pass.
//!
//! A predicate that follows `<1` opens an existential over every variable
//! its box will mention, but the forward walk only learns those variables
//! after the marker has been emitted. This pass scans the fragments
//! backwards, collecting references, and replaces each [`Fragment::Deferred`]
//! with the sorted set collected since the previous marker (closer to the
//! end). Nested markers therefore each bind only their own region.
//!
//! Each marker binds only variables numbered at or above its own predicate's
//! variable. Lower ids were introduced earlier and are already bound by an
//! enclosing `exists xk` or an enclosing marker's list.

use crate::ir::{Fragment, Var};
use std::collections::BTreeSet;
use tracing::trace;

pub fn reconcile(fragments: &mut [Fragment<'_>]) {
    let mut seen: BTreeSet<Var> = BTreeSet::new();
    // Variable of the closest predicate after the current scan position.
    let mut floor = Var(1);

    for fragment in fragments.iter_mut().rev() {
        if *fragment == Fragment::Deferred {
            let vars: Vec<Var> = std::mem::take(&mut seen)
                .into_iter()
                .filter(|v| *v >= floor)
                .collect();
            trace!(count = vars.len(), floor = floor.0, "deferred binding resolved");
            *fragment = Fragment::Bound(vars);
            continue;
        }

        if let Fragment::Predicate { var, .. } = fragment {
            floor = *var;
        }
        seen.extend(fragment.references());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(name: &str, id: u32) -> Fragment<'_> {
        Fragment::Predicate { name, var: Var(id) }
    }

    #[test]
    fn replaces_marker_with_sorted_unique_vars() {
        let mut fragments = vec![
            Fragment::Quantifier(None),
            Fragment::Deferred,
            Fragment::Open,
            pred("b", 2),
            Fragment::Relation {
                role: "Theme",
                owner: Var(2),
                target: Var(3),
            },
            pred("a", 3),
            Fragment::Relation {
                role: "Agent",
                owner: Var(2),
                target: Var(3),
            },
            Fragment::Close,
        ];
        reconcile(&mut fragments);
        assert_eq!(fragments[1], Fragment::Bound(vec![Var(2), Var(3)]));
    }

    #[test]
    fn earlier_vars_are_excluded() {
        let mut fragments = vec![
            Fragment::Quantifier(Some(Var(1))),
            Fragment::Open,
            pred("a", 1),
            Fragment::Quantifier(None),
            Fragment::Deferred,
            Fragment::Open,
            pred("b", 2),
            Fragment::Relation {
                role: "Theme",
                owner: Var(2),
                target: Var(1),
            },
            Fragment::Close,
            Fragment::Close,
        ];
        reconcile(&mut fragments);
        assert_eq!(fragments[4], Fragment::Bound(vec![Var(2)]));
    }

    #[test]
    fn nested_markers_bind_their_own_region() {
        let mut fragments = vec![
            Fragment::Quantifier(None),
            Fragment::Deferred,
            Fragment::Open,
            pred("a", 1),
            Fragment::And,
            Fragment::Operator("NOT"),
            Fragment::Quantifier(None),
            Fragment::Deferred,
            Fragment::Open,
            pred("b", 2),
            pred("c", 3),
            Fragment::Close,
            Fragment::Close,
        ];
        reconcile(&mut fragments);
        assert_eq!(fragments[1], Fragment::Bound(vec![Var(1)]));
        assert_eq!(fragments[7], Fragment::Bound(vec![Var(2), Var(3)]));
    }

    #[test]
    fn no_markers_is_a_no_op() {
        let mut fragments = vec![
            Fragment::Quantifier(Some(Var(1))),
            Fragment::Open,
            pred("a", 1),
            Fragment::Close,
        ];
        let before = fragments.clone();
        reconcile(&mut fragments);
        assert_eq!(fragments, before);
    }
}
