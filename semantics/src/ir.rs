//! First-Order Logic output fragments.
//!
//! The translator does not build a formula tree. It emits a flat, ordered
//! sequence of [`Fragment`]s whose space-joined display forms are the final
//! formula. Nesting exists only as literal `[` / `]` fragments.
//!
//! Predicate and role names borrow from the DRS input; nothing is copied
//! until the formula string is assembled.

use std::fmt;

/// An entity variable `xk`, `k >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(pub u32);

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Var(Var),
    /// A constant passed through verbatim (`now`, `"tom"`, `3`).
    Constant(&'a str),
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Var(v) => write!(f, "{}", v),
            Operand::Constant(c) => f.write_str(c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// `exists xk`, or a bare `exists` waiting for a deferred binding.
    Quantifier(Option<Var>),
    /// Placeholder for a variable list known only after the walk.
    Deferred,
    /// Reconciled variable list: `[ x2 x3 x4 ]`.
    Bound(Vec<Var>),
    Open,
    Close,
    /// Unary predicate application: `be.v.01(x2)`.
    Predicate { name: &'a str, var: Var },
    /// Binary role relation: `Theme(x2, x1)`.
    Relation { role: &'a str, owner: Var, target: Var },
    /// Infix comparison: `x3 = now`. Missing operands are omitted.
    Comparison {
        left: Option<Var>,
        op: &'a str,
        right: Option<Operand<'a>>,
    },
    And,
    /// Connective operator following an `&` (`NOT`, `CON`).
    Operator(&'static str),
}

impl<'a> Fragment<'a> {
    /// True for fragments that complete a conjunct and may be followed by `&`.
    pub fn ends_conjunct(&self) -> bool {
        matches!(
            self,
            Fragment::Predicate { .. } | Fragment::Relation { .. } | Fragment::Comparison { .. }
        )
    }

    /// Variables this fragment references (not the ones it binds).
    pub fn references(&self) -> Vec<Var> {
        match self {
            Fragment::Predicate { var, .. } => vec![*var],
            Fragment::Relation { owner, target, .. } => vec![*owner, *target],
            Fragment::Comparison { left, right, .. } => {
                let mut vars: Vec<Var> = left.iter().copied().collect();
                if let Some(Operand::Var(v)) = right {
                    vars.push(*v);
                }
                vars
            }
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Quantifier(Some(v)) => write!(f, "exists {}", v),
            Fragment::Quantifier(None) => f.write_str("exists"),
            // Never survives reconciliation; render an empty binding if it does.
            Fragment::Deferred => f.write_str("[ ]"),
            Fragment::Bound(vars) => {
                f.write_str("[")?;
                for v in vars {
                    write!(f, " {}", v)?;
                }
                f.write_str(" ]")
            }
            Fragment::Open => f.write_str("["),
            Fragment::Close => f.write_str("]"),
            Fragment::Predicate { name, var } => write!(f, "{}({})", name, var),
            Fragment::Relation {
                role,
                owner,
                target,
            } => write!(f, "{}({}, {})", role, owner, target),
            Fragment::Comparison { left, op, right } => {
                let mut parts = Vec::with_capacity(3);
                if let Some(v) = left {
                    parts.push(v.to_string());
                }
                parts.push((*op).to_string());
                if let Some(r) = right {
                    parts.push(r.to_string());
                }
                f.write_str(&parts.join(" "))
            }
            Fragment::And => f.write_str("&"),
            Fragment::Operator(op) => f.write_str(op),
        }
    }
}
