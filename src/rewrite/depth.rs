use super::{relink, BottomUp, Sharing};
use crate::analysis::Depths;
use crate::circuit::{Circuit, Node, NodeId};

use log::{debug, trace};
use std::collections::HashMap;

/// Rebalance chains of multiplications to reduce multiplicative depth.
///
/// A chain `((a * b) * c) * d` has depth 3 while `(a * b) * (c * d)` has depth 2. For every
/// maximal subcircuit connected by MUL gates the pass collects the factors (see
/// [`crate::rewrite::flatten_mul_operands`]), reduces each factor recursively, and rebuilds the product
/// with [`DepthReducer::build_mul_tree`]. A multiplication with several parents is not part of
/// any chain: it is a factor of each of them and is reduced once on its own.
///
/// The rebuilt product replaces the chain only when it is strictly shallower, so depth never
/// increases. Its depth is known before any gate is built, and a chain that is kept leaves the
/// circuit unchanged.
#[derive(Debug, Clone, Default)]
pub struct DepthReducer {
    reduced: HashMap<NodeId, NodeId>,
    chains: HashMap<NodeId, Vec<NodeId>>,
    depths: Depths,
    sharing: Sharing,
}

impl DepthReducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, circuit: &mut Circuit, root: NodeId) -> NodeId {
        self.sharing.scan(circuit, root);
        let result = self.run(circuit, root);
        debug!(
            "reduce_depth: {:?} (depth {}) -> {:?} (depth {})",
            root,
            self.depths.depth(circuit, root),
            result,
            self.depths.depth(circuit, result),
        );
        result
    }

    /// Multiply `operands` together in a balanced tree.
    ///
    /// Operands are stably sorted by depth, then paired left to right into MUL gates; the
    /// products form the next generation, and an unpaired last operand is carried over to it.
    /// This repeats until one node is left. Every operand is used exactly once, including
    /// repeated ones, so the result is the product of the whole list. The product of no
    /// operands is the constant 1.
    pub fn build_mul_tree(&mut self, circuit: &mut Circuit, operands: Vec<NodeId>) -> NodeId {
        balanced_product(circuit, &mut self.depths, operands)
    }
}

pub(crate) fn balanced_product(
    circuit: &mut Circuit,
    depths: &mut Depths,
    operands: Vec<NodeId>,
) -> NodeId {
    let mut keyed: Vec<(usize, NodeId)> = operands
        .into_iter()
        .map(|id| (depths.depth(circuit, id), id))
        .collect();
    keyed.sort_by_key(|&(d, _)| d);

    let mut layer: Vec<NodeId> = keyed.into_iter().map(|(_, id)| id).collect();
    while layer.len() > 1 {
        layer = layer
            .chunks(2)
            .map(|pair| match *pair {
                [l, r] => circuit.push(Node::Mul(l, r)),
                [odd] => odd,
                _ => unreachable!("chunks(2) yields one or two elements"),
            })
            .collect();
    }
    match layer.pop() {
        Some(id) => id,
        None => circuit.constant(1),
    }
}

// The depth of the tree `balanced_product` builds over operands of the given depths.
fn balanced_depth(mut layer: Vec<usize>) -> usize {
    layer.sort_unstable();
    while layer.len() > 1 {
        layer = layer
            .chunks(2)
            .map(|pair| match *pair {
                [l, r] => l.max(r) + 1,
                [odd] => odd,
                _ => unreachable!("chunks(2) yields one or two elements"),
            })
            .collect();
    }
    layer.pop().unwrap_or(0)
}

impl BottomUp for DepthReducer {
    fn memo(&self) -> &HashMap<NodeId, NodeId> {
        &self.reduced
    }

    fn memo_mut(&mut self) -> &mut HashMap<NodeId, NodeId> {
        &mut self.reduced
    }

    // A chain depends on its factors, not on the MUL gates inside it.
    fn dependencies(&mut self, circuit: &Circuit, id: NodeId) -> Vec<NodeId> {
        match circuit.node(id) {
            Node::Mul(..) => {
                let sharing = &self.sharing;
                self.chains
                    .entry(id)
                    .or_insert_with(|| sharing.mul_factors(circuit, id))
                    .clone()
            }
            node => node.children().collect(),
        }
    }

    fn rebuild(&mut self, circuit: &mut Circuit, id: NodeId) -> NodeId {
        let result = if circuit.node(id).as_mul().is_none() {
            relink(circuit, &self.reduced, id)
        } else {
            self.rebalance(circuit, id)
        };
        self.sharing.inherit(id, result);
        result
    }
}

impl DepthReducer {
    fn rebalance(&mut self, circuit: &mut Circuit, id: NodeId) -> NodeId {
        let operands: Vec<NodeId> = self
            .chains
            .remove(&id)
            .unwrap_or_else(|| self.sharing.mul_factors(circuit, id))
            .into_iter()
            .map(|op| self.reduced[&op])
            .collect();
        let count = operands.len();

        let old = self.depths.depth(circuit, id);
        let new = balanced_depth(
            operands
                .iter()
                .map(|&op| self.depths.depth(circuit, op))
                .collect(),
        );
        if new < old {
            trace!("rebalanced chain {id:?} of {count} factors: depth {old} -> {new}");
            self.build_mul_tree(circuit, operands)
        } else {
            trace!("kept chain {id:?} of {count} factors at depth {old}");
            id
        }
    }
}

/// Reduce the multiplicative depth of `root`.
pub fn reduce_depth(circuit: &mut Circuit, root: NodeId) -> NodeId {
    DepthReducer::new().reduce(circuit, root)
}

/// Reduce the multiplicative depth of several outputs, sharing work between them.
pub fn reduce_depth_many(circuit: &mut Circuit, roots: &[NodeId]) -> Vec<NodeId> {
    let mut pass = DepthReducer::new();
    roots.iter().map(|&r| pass.reduce(circuit, r)).collect()
}

/// Multiply `operands` together in a balanced tree; see [`DepthReducer::build_mul_tree`].
pub fn build_mul_tree(circuit: &mut Circuit, operands: Vec<NodeId>) -> NodeId {
    DepthReducer::new().build_mul_tree(circuit, operands)
}
