//! The circuit intermediate representation.
//!
//! A [`Circuit`] is an append-only arena of [`Node`]s. Every node refers only to nodes created
//! before it, so a circuit is always acyclic and ascending [`NodeId`] order is a topological
//! order. Nodes are never modified after they are created: optimisation passes append new nodes
//! and return a new root, leaving the old root (and everything reachable from it) untouched.
//!
//! ```rust
//! use semiring_circuits::circuit::{Circuit, Node};
//!
//! let mut c = Circuit::empty();
//! let x = c.input("x");
//! let y = c.input("y");
//! let zero = c.constant(0);
//!
//! // constants fold when they are the left operand
//! assert_eq!(c.add(zero, x), x);
//!
//! let xy = c.mul(x, y);
//! assert_eq!(c.node(xy), &Node::Mul(x, y));
//! assert_eq!(c.display(xy).to_string(), "( x * y )");
//! ```
mod display;
mod node;

pub use display::*;
pub use node::*;

use crate::error::{Error, Result};

/// An arena of circuit nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Node>", into = "Vec<Node>")
)]
pub struct Circuit {
    nodes: Vec<Node>,
}

impl Circuit {
    /// The circuit with no nodes.
    pub fn empty() -> Self {
        Circuit { nodes: vec![] }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get the node with index `id`.
    ///
    /// Panics if `id` was not created by this circuit.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Append a node without constant folding.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug_assert!(node.children().all(|c| c < id), "child of {id:?} is not earlier");
        self.nodes.push(node);
        id
    }

    pub fn constant(&mut self, value: u64) -> NodeId {
        self.push(Node::Constant(value))
    }

    pub fn input(&mut self, name: impl Into<String>) -> NodeId {
        self.push(Node::Input(name.into()))
    }

    /// `a + b`. Returns `b` unchanged when `a` is the constant 0.
    pub fn add(&mut self, a: NodeId, b: NodeId) -> NodeId {
        if self.node(a).is_constant(0) {
            return b;
        }
        self.push(Node::Add(a, b))
    }

    /// `a * b`. Returns `a` when `a` is the constant 0 and `b` when `a` is the constant 1.
    pub fn mul(&mut self, a: NodeId, b: NodeId) -> NodeId {
        match self.node(a) {
            Node::Constant(0) => a,
            Node::Constant(1) => b,
            _ => self.push(Node::Mul(a, b)),
        }
    }

    pub fn shift_left(&mut self, a: NodeId, amount: usize) -> NodeId {
        self.push(Node::ShiftLeft(a, amount))
    }

    pub fn shift_right(&mut self, a: NodeId, amount: usize) -> NodeId {
        self.push(Node::ShiftRight(a, amount))
    }

    /// Create `dim` inputs named `"{name}0"`, `"{name}1"`, ...
    pub fn vector_input(&mut self, name: &str, dim: usize) -> Vec<NodeId> {
        (0..dim).map(|i| self.input(format!("{name}{i}"))).collect()
    }

    /// Create `n` vectors of `nbits` inputs; vector `i` is `vector_input("{name}{i}", nbits)`.
    pub fn array_input(&mut self, name: &str, n: usize, nbits: usize) -> Vec<Vec<NodeId>> {
        (0..n)
            .map(|i| self.vector_input(&format!("{name}{i}"), nbits))
            .collect()
    }

    /// All nodes reachable from `root` (including `root`), in ascending order.
    ///
    /// Children always precede their parents in the result.
    pub fn reachable(&self, root: NodeId) -> Vec<NodeId> {
        self.reachable_from(&[root])
    }

    /// All nodes reachable from any of `roots`, in ascending order.
    pub fn reachable_from(&self, roots: &[NodeId]) -> Vec<NodeId> {
        let Some(max) = roots.iter().max() else {
            return vec![];
        };

        let mut seen = vec![false; max.0 + 1];
        let mut stack: Vec<NodeId> = roots.to_vec();
        while let Some(id) = stack.pop() {
            if seen[id.0] {
                continue;
            }
            seen[id.0] = true;
            stack.extend(self.node(id).children().filter(|c| !seen[c.0]));
        }

        seen.into_iter()
            .enumerate()
            .filter_map(|(i, s)| s.then_some(NodeId(i)))
            .collect()
    }
}

impl TryFrom<Vec<Node>> for Circuit {
    type Error = Error;

    /// Accept a list of nodes only if every node refers to earlier nodes.
    fn try_from(nodes: Vec<Node>) -> Result<Self> {
        for (i, node) in nodes.iter().enumerate() {
            if let Some(child) = node.children().find(|c| c.0 >= i) {
                return Err(Error::ForwardReference {
                    node: NodeId(i),
                    child,
                });
            }
        }
        Ok(Circuit { nodes })
    }
}

impl From<Circuit> for Vec<Node> {
    fn from(c: Circuit) -> Self {
        c.nodes
    }
}
