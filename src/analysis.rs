//! Multiplicative depth and gate counts.
use crate::circuit::{Circuit, GateKinds, Node, NodeId};

use std::collections::HashMap;

/// A memo table of multiplicative depths.
///
/// Circuits only grow and their nodes never change, so the cache stays valid while the same
/// circuit gains new nodes; it must not be used with a different circuit.
#[derive(Debug, Clone, Default)]
pub struct Depths {
    cache: HashMap<NodeId, usize>,
}

impl Depths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiplicative depth of `root`: the largest number of MUL gates on any path from `root`
    /// to a terminal. Additions and shifts are free.
    pub fn depth(&mut self, circuit: &Circuit, root: NodeId) -> usize {
        let mut stack = vec![root];
        while let Some(&id) = stack.last() {
            if self.cache.contains_key(&id) {
                stack.pop();
                continue;
            }

            let node = circuit.node(id);
            let pending: Vec<NodeId> = node
                .children()
                .filter(|c| !self.cache.contains_key(c))
                .collect();
            if !pending.is_empty() {
                stack.extend(pending);
                continue;
            }

            let d = match *node {
                Node::Constant(_) | Node::Input(_) => 0,
                Node::Add(l, r) => self.cache[&l].max(self.cache[&r]),
                Node::Mul(l, r) => self.cache[&l].max(self.cache[&r]) + 1,
                Node::ShiftLeft(x, _) | Node::ShiftRight(x, _) => self.cache[&x],
            };
            self.cache.insert(id, d);
            stack.pop();
        }
        self.cache[&root]
    }
}

/// Multiplicative depth of `root`, with a fresh memo table.
pub fn depth(circuit: &Circuit, root: NodeId) -> usize {
    Depths::new().depth(circuit, root)
}

/// Maximum multiplicative depth over several outputs.
pub fn max_depth(circuit: &Circuit, roots: &[NodeId]) -> usize {
    let mut depths = Depths::new();
    roots
        .iter()
        .map(|&r| depths.depth(circuit, r))
        .max()
        .unwrap_or(0)
}

/// Count the distinct gates reachable from `root` whose operation is in `kinds`.
///
/// A gate shared by several parents is counted once.
pub fn gate_count(circuit: &Circuit, root: NodeId, kinds: GateKinds) -> usize {
    gate_count_many(circuit, &[root], kinds)
}

/// Like [`gate_count`], but gates shared between outputs are counted once overall.
pub fn gate_count_many(circuit: &Circuit, roots: &[NodeId], kinds: GateKinds) -> usize {
    circuit
        .reachable_from(roots)
        .into_iter()
        .filter(|&id| {
            circuit
                .node(id)
                .op()
                .is_some_and(|op| kinds.contains(op.kind()))
        })
        .count()
}
