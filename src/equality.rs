//! Structural equality of circuit nodes.
//!
//! Two nodes are structurally equal when they are equal terminals, or gates of the same
//! operation whose children are pairwise structurally equal. For `+` and `*` the children may
//! also match crosswise, so `a + b` equals `b + a`. Associativity is *not* taken into account:
//! `(a + b) + c` and `a + (b + c)` are different. Passes that need to see through associative
//! chains flatten them first (see [`crate::rewrite::flatten_mul_operands`]).
use crate::circuit::{Circuit, Node, NodeId};

use std::collections::HashMap;

/// A memo table for structural equality.
///
/// Without memoisation the commutative case makes the check exponential in the depth of the
/// circuit. Like [`crate::analysis::Depths`], the table is only valid for one circuit.
#[derive(Debug, Clone, Default)]
pub struct Equality {
    cache: HashMap<(NodeId, NodeId), bool>,
}

// The next step in deciding whether a pair of nodes is equal.
enum Step {
    Done(bool),
    Need(NodeId, NodeId),
}

fn key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    (a.min(b), a.max(b))
}

impl Equality {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `a` and `b` are structurally equal.
    pub fn equal(&mut self, circuit: &Circuit, a: NodeId, b: NodeId) -> bool {
        let mut stack = vec![(a, b)];
        while let Some(&(x, y)) = stack.last() {
            if self.lookup(x, y).is_some() {
                stack.pop();
                continue;
            }
            match self.step(circuit, x, y) {
                Step::Done(result) => {
                    self.cache.insert(key(x, y), result);
                    stack.pop();
                }
                Step::Need(p, q) => stack.push((p, q)),
            }
        }
        // identical nodes never enter the cache
        self.lookup(a, b) == Some(true)
    }

    fn lookup(&self, a: NodeId, b: NodeId) -> Option<bool> {
        if a == b {
            return Some(true);
        }
        self.cache.get(&key(a, b)).copied()
    }

    // Decide (x, y) from cached results for child pairs, or name the first child pair that is
    // still unknown. Child pairs are requested in the order the conjunctions and disjunction
    // short-circuit, so no more pairs are compared than necessary.
    fn step(&self, circuit: &Circuit, x: NodeId, y: NodeId) -> Step {
        use Node::*;

        let both = |(p, q): (NodeId, NodeId), (r, s): (NodeId, NodeId)| -> Step {
            match self.lookup(p, q) {
                None => Step::Need(p, q),
                Some(false) => Step::Done(false),
                Some(true) => match self.lookup(r, s) {
                    None => Step::Need(r, s),
                    Some(result) => Step::Done(result),
                },
            }
        };

        match (circuit.node(x), circuit.node(y)) {
            (Constant(u), Constant(v)) => Step::Done(u == v),
            (Input(m), Input(n)) => Step::Done(m == n),
            (ShiftLeft(p, j), ShiftLeft(q, k)) | (ShiftRight(p, j), ShiftRight(q, k)) => {
                if j != k {
                    return Step::Done(false);
                }
                match self.lookup(*p, *q) {
                    None => Step::Need(*p, *q),
                    Some(result) => Step::Done(result),
                }
            }
            (Add(l1, r1), Add(l2, r2)) | (Mul(l1, r1), Mul(l2, r2)) => {
                match both((*l1, *l2), (*r1, *r2)) {
                    Step::Done(false) => both((*l1, *r2), (*r1, *l2)),
                    other => other,
                }
            }
            _ => Step::Done(false),
        }
    }
}

/// Decide whether `a` and `b` are structurally equal, with a fresh memo table.
pub fn equal(circuit: &Circuit, a: NodeId, b: NodeId) -> bool {
    Equality::new().equal(circuit, a, b)
}
