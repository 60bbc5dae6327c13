//! Optimisation passes.
//!
//! Each pass rewrites the subcircuit reachable from a root into new nodes of the same
//! [`Circuit`] and returns the new root. Original nodes are never modified, so the old root
//! remains valid and computes the same value as the new one.
//!
//! Every pass comes as a pass object owning its memo tables ([`Dedup`], [`DepthReducer`],
//! [`Simplifier`], [`Expander`]) and as free functions that use a fresh pass object per call.
//! Use one pass object to rewrite several outputs of the same circuit so that their shared
//! subcircuits are rewritten once.
mod depth;
mod distributive;
mod hash_cons;

pub use depth::*;
pub use distributive::*;
pub use hash_cons::*;

use crate::circuit::{Circuit, Node, NodeId};

use std::collections::{HashMap, HashSet};

/// Flatten the MUL-only subcircuit at `root` into its factors, left to right.
///
/// Any node that is not a multiplication (including additions) is a factor and is not looked
/// into. A factor reachable along several paths appears once per path, so the product of the
/// result always equals `root`.
pub fn flatten_mul_operands(circuit: &Circuit, root: NodeId) -> Vec<NodeId> {
    flatten(circuit, root, Node::as_mul)
}

/// Flatten the ADD-only subcircuit at `root` into its addends, left to right.
pub(crate) fn flatten_add_operands(circuit: &Circuit, root: NodeId) -> Vec<NodeId> {
    flatten(circuit, root, Node::as_add)
}

fn flatten(
    circuit: &Circuit,
    root: NodeId,
    split: fn(&Node) -> Option<(NodeId, NodeId)>,
) -> Vec<NodeId> {
    flatten_until(circuit, root, split, |_| false)
}

// Like `flatten`, but nodes below `root` for which `atomic` holds are operands even if `split`
// would look into them.
fn flatten_until(
    circuit: &Circuit,
    root: NodeId,
    split: fn(&Node) -> Option<(NodeId, NodeId)>,
    atomic: impl Fn(NodeId) -> bool,
) -> Vec<NodeId> {
    let mut operands = vec![];
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let parts = if id != root && atomic(id) {
            None
        } else {
            split(circuit.node(id))
        };
        match parts {
            Some((l, r)) => {
                stack.push(r);
                stack.push(l);
            }
            None => operands.push(id),
        }
    }
    operands
}

/// Fan-in of the nodes a pass has seen, used to keep shared products intact.
///
/// A multiplication used by more than one parent is a factor of each product that uses it
/// rather than part of their chains. It is then rewritten once on its own, and flattening a
/// chain visits every node below it at most once. Without this, `p = p * p` repeated `k` times
/// flattens into `2^k` factors.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sharing {
    parents: HashMap<NodeId, usize>,
    visited: HashSet<NodeId>,
}

impl Sharing {
    /// Count the parents of every node reachable from `root` that was not reachable from an
    /// earlier root.
    pub(crate) fn scan(&mut self, circuit: &Circuit, root: NodeId) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !self.visited.insert(id) {
                continue;
            }
            for child in circuit.node(id).children() {
                *self.parents.entry(child).or_default() += 1;
                stack.push(child);
            }
        }
    }

    pub(crate) fn is_shared(&self, id: NodeId) -> bool {
        self.parents.get(&id).is_some_and(|&n| n > 1)
    }

    /// `new` is the rewritten form of `old`, and is used wherever `old` was.
    pub(crate) fn inherit(&mut self, old: NodeId, new: NodeId) {
        if old != new && self.is_shared(old) {
            let n = self.parents.entry(new).or_default();
            *n = (*n).max(2);
        }
    }

    /// The factors of `root` as [`flatten_mul_operands`] finds them, except that shared
    /// multiplications below `root` are factors themselves.
    pub(crate) fn mul_factors(&self, circuit: &Circuit, root: NodeId) -> Vec<NodeId> {
        flatten_until(circuit, root, Node::as_mul, |id| self.is_shared(id))
    }
}

// A memoised bottom-up rewrite, driven by an explicit stack so that deep circuits cannot
// overflow the call stack.
pub(crate) trait BottomUp {
    fn memo(&self) -> &HashMap<NodeId, NodeId>;

    fn memo_mut(&mut self) -> &mut HashMap<NodeId, NodeId>;

    /// Nodes that must be rewritten before `id` can be.
    fn dependencies(&mut self, circuit: &Circuit, id: NodeId) -> Vec<NodeId> {
        circuit.node(id).children().collect()
    }

    /// Rewrite `id`, whose dependencies are all in the memo table.
    fn rebuild(&mut self, circuit: &mut Circuit, id: NodeId) -> NodeId;

    fn run(&mut self, circuit: &mut Circuit, root: NodeId) -> NodeId {
        let mut stack = vec![root];
        while let Some(&id) = stack.last() {
            if self.memo().contains_key(&id) {
                stack.pop();
                continue;
            }

            let pending: Vec<NodeId> = self
                .dependencies(circuit, id)
                .into_iter()
                .filter(|d| !self.memo().contains_key(d))
                .collect();
            if pending.is_empty() {
                let result = self.rebuild(circuit, id);
                self.memo_mut().insert(id, result);
                stack.pop();
            } else {
                stack.extend(pending);
            }
        }
        self.memo()[&root]
    }
}

// Rebuild `id` with each child replaced by its rewritten form; reuse `id` if nothing changed.
pub(crate) fn relink(circuit: &mut Circuit, memo: &HashMap<NodeId, NodeId>, id: NodeId) -> NodeId {
    let node = circuit.node(id);
    if node.children().all(|c| memo[&c] == c) {
        return id;
    }
    let node = node.map_children(|c| memo[&c]);
    circuit.push(node)
}
