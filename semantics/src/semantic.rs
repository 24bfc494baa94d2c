use crate::ir::{Fragment, Operand, Var};
use drs_parser::lexicon::{self, Connective};
use drs_parser::{Token, TokenKind};
use tracing::{debug, trace};

/// Box marker that turns the next predicate into a deferred binding.
const DEFERRED_BOX: &str = "<1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// Split a relative offset token (`-1`, `+2`) into sign and magnitude.
pub fn parse_offset(text: &str) -> Option<(Sign, u32)> {
    let (sign, digits) = if let Some(rest) = text.strip_prefix('+') {
        (Sign::Plus, rest)
    } else if let Some(rest) = text.strip_prefix('-') {
        (Sign::Minus, rest)
    } else {
        return None;
    };
    digits.parse::<u32>().ok().map(|magnitude| (sign, magnitude))
}

/// Resolve an offset against the current variable. Ids below 1 do not exist.
pub fn resolve_offset(current: u32, sign: Sign, magnitude: u32) -> Option<Var> {
    let id = match sign {
        Sign::Minus => current.checked_sub(magnitude)?,
        Sign::Plus => current.checked_add(magnitude)?,
    };
    (id >= 1).then_some(Var(id))
}

/// Per-call state of the forward walk over a classified token stream.
///
/// Variables are numbered by predicate order: the k-th predicate introduces
/// `xk`. Offsets never allocate; a `+N` is a forward reference to a predicate
/// that has not been seen yet.
pub struct FolTranslator<'a> {
    pub var_counter: u32,
    pub open_boxes: usize,
    deferred_depth: usize,
    fragments: Vec<Fragment<'a>>,
}

impl<'a> FolTranslator<'a> {
    pub fn new() -> Self {
        Self {
            var_counter: 0,
            open_boxes: 0,
            deferred_depth: 0,
            fragments: Vec::new(),
        }
    }

    /// Walk the stream once and return the unreconciled fragment sequence.
    pub fn walk(mut self, tokens: &[Token<'a>]) -> Vec<Fragment<'a>> {
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i];
            let next = tokens.get(i + 1).copied();

            let consumed = match token.kind {
                TokenKind::Predicate => {
                    let deferred = i > 0 && tokens[i - 1].text == DEFERRED_BOX;
                    self.introduce(token.text, deferred);
                    0
                }
                TokenKind::Role => self.relate(token.text, next),
                TokenKind::Comparison => self.compare(token.text, next),
                TokenKind::Connective(connective) => {
                    self.connect(connective);
                    0
                }
                TokenKind::RelativeOffset => {
                    trace!(offset = token.text, "offset without a role, skipped");
                    0
                }
                TokenKind::BoxMarker | TokenKind::Other => 0,
            };

            i += 1 + consumed;
        }

        for _ in 0..self.open_boxes {
            self.fragments.push(Fragment::Close);
        }
        self.fragments
    }

    fn current(&self) -> Option<Var> {
        (self.var_counter >= 1).then_some(Var(self.var_counter))
    }

    /// Emit `&` when the previous fragment closed a conjunct.
    fn conjoin(&mut self) {
        if self.fragments.last().is_some_and(Fragment::ends_conjunct) {
            self.fragments.push(Fragment::And);
        }
    }

    fn open_box(&mut self) {
        self.fragments.push(Fragment::Open);
        self.open_boxes += 1;
    }

    fn introduce(&mut self, name: &'a str, deferred: bool) {
        self.var_counter += 1;
        let var = Var(self.var_counter);
        self.conjoin();

        if deferred {
            self.fragments.push(Fragment::Quantifier(None));
            self.fragments.push(Fragment::Deferred);
            self.open_box();
            self.deferred_depth += 1;
        } else if self.deferred_depth == 0 {
            self.fragments.push(Fragment::Quantifier(Some(var)));
            self.open_box();
        }
        // Inside a deferred box the variable is bound by the box's list.

        self.fragments.push(Fragment::Predicate { name, var });
    }

    /// Returns how many following tokens were consumed.
    fn relate(&mut self, role: &'a str, next: Option<Token<'a>>) -> usize {
        let Some(offset) = next.filter(|t| t.kind == TokenKind::RelativeOffset) else {
            debug!(role, "role without a following offset, skipped");
            return 0;
        };

        let Some(owner) = self.current() else {
            debug!(role, "role before any predicate, skipped");
            return 1;
        };

        match parse_offset(offset.text).and_then(|(s, m)| resolve_offset(owner.0, s, m)) {
            Some(target) => {
                self.conjoin();
                self.fragments.push(Fragment::Relation {
                    role,
                    owner,
                    target,
                });
            }
            None => debug!(
                role,
                offset = offset.text,
                owner = owner.0,
                "offset out of range, skipped"
            ),
        }
        1
    }

    fn compare(&mut self, text: &'a str, next: Option<Token<'a>>) -> usize {
        let op = lexicon::comparison_operator(text);
        let left = self.current();

        let (right, consumed) = match next {
            Some(t) if t.kind == TokenKind::RelativeOffset => {
                let resolved = left
                    .zip(parse_offset(t.text))
                    .and_then(|(v, (s, m))| resolve_offset(v.0, s, m));
                match resolved {
                    Some(var) => (Some(Operand::Var(var)), 1),
                    None => {
                        debug!(
                            op,
                            offset = t.text,
                            "comparison offset out of range, skipped"
                        );
                        return 1;
                    }
                }
            }
            Some(t) if t.kind == TokenKind::Other => (Some(Operand::Constant(t.text)), 1),
            _ => (None, 0),
        };

        self.conjoin();
        self.fragments.push(Fragment::Comparison { left, op, right });
        consumed
    }

    fn connect(&mut self, connective: Connective) {
        self.fragments.push(Fragment::And);
        if let Some(op) = connective.operator() {
            self.fragments.push(Fragment::Operator(op));
        }
    }
}

impl Default for FolTranslator<'_> {
    fn default() -> Self {
        Self::new()
    }
}
