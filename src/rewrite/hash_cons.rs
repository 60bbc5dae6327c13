use crate::analysis::gate_count_many;
use crate::circuit::{Circuit, GateKinds, Node, NodeId};

use log::{debug, log_enabled, Level};
use std::collections::HashMap;

/// Common subexpression elimination by hash-consing.
///
/// Nodes are visited children first. Once a node's children have been replaced by their
/// representatives, it is structurally equal (in the sense of [`crate::equality`]) to an
/// earlier representative exactly when both have the same operation and the same children up
/// to the order of `+` and `*` operands. That makes a hash table keyed on
/// [`Node::commutative_key`] sufficient to find the representative.
#[derive(Debug, Clone, Default)]
pub struct Dedup {
    canonical: HashMap<NodeId, NodeId>,
    representatives: HashMap<Node, NodeId>,
}

impl Dedup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dedup(&mut self, circuit: &mut Circuit, root: NodeId) -> NodeId {
        for id in circuit.reachable(root) {
            if self.canonical.contains_key(&id) {
                continue;
            }

            let node = circuit.node(id);
            let rebuilt = node.map_children(|c| self.canonical[&c]);
            let key = rebuilt.commutative_key();

            let representative = match self.representatives.get(&key) {
                Some(&rep) => rep,
                None => {
                    let rep = if &rebuilt == node {
                        id
                    } else {
                        circuit.push(rebuilt)
                    };
                    self.representatives.insert(key, rep);
                    rep
                }
            };
            self.canonical.insert(id, representative);
        }
        self.canonical[&root]
    }
}

/// Merge structurally equal subcircuits of `root`.
pub fn dedup(circuit: &mut Circuit, root: NodeId) -> NodeId {
    dedup_many(circuit, &[root])[0]
}

/// Merge structurally equal subcircuits across several outputs.
pub fn dedup_many(circuit: &mut Circuit, roots: &[NodeId]) -> Vec<NodeId> {
    let before = log_enabled!(Level::Debug)
        .then(|| gate_count_many(circuit, roots, GateKinds::all()));
    let mut pass = Dedup::new();
    let result: Vec<NodeId> = roots.iter().map(|&r| pass.dedup(circuit, r)).collect();
    if let Some(before) = before {
        debug!(
            "dedup: {} outputs, {} -> {} gates",
            roots.len(),
            before,
            gate_count_many(circuit, &result, GateKinds::all())
        );
    }
    result
}
