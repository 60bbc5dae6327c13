//! A value-agnostic evaluator
//!
use crate::circuit::{Circuit, Node, NodeId};
use crate::error::{Error, Result};

use std::collections::HashMap;
use std::ops::{Add, Mul, Shl, Shr};

/// Values a circuit can be evaluated over: a commutative semiring with a shift by a known
/// amount.
///
/// Commutativity and associativity are not checked, but every optimisation pass relies on them.
pub trait Semiring:
    Clone + Add<Output = Self> + Mul<Output = Self> + Shl<usize, Output = Self> + Shr<usize, Output = Self>
{
}

impl<T> Semiring for T where
    T: Clone
        + Add<Output = T>
        + Mul<Output = T>
        + Shl<usize, Output = T>
        + Shr<usize, Output = T>
{
}

/// Evaluates nodes of one circuit for one assignment of inputs.
///
/// Every node is evaluated at most once per `Evaluator`, so evaluating several outputs that
/// share subcircuits through the same `Evaluator` does the shared work once.
pub struct Evaluator<'a, T, F> {
    circuit: &'a Circuit,
    inputs: &'a HashMap<String, T>,
    lift: F,
    memo: HashMap<NodeId, T>,
}

impl<'a, T: Semiring, F: Fn(u64) -> T> Evaluator<'a, T, F> {
    /// `lift` maps the value of each constant node into `T`.
    pub fn new(circuit: &'a Circuit, inputs: &'a HashMap<String, T>, lift: F) -> Self {
        Evaluator {
            circuit,
            inputs,
            lift,
            memo: HashMap::new(),
        }
    }

    /// Evaluate `root`, failing with [`Error::MissingInput`] if it depends on an input that has
    /// no value.
    pub fn eval(&mut self, root: NodeId) -> Result<T> {
        if let Some(v) = self.memo.get(&root) {
            return Ok(v.clone());
        }

        let circuit = self.circuit;
        let mut stack = vec![root];
        while let Some(&id) = stack.last() {
            if self.memo.contains_key(&id) {
                stack.pop();
                continue;
            }

            let node = circuit.node(id);
            let pending: Vec<NodeId> = node
                .children()
                .filter(|c| !self.memo.contains_key(c))
                .collect();
            if !pending.is_empty() {
                stack.extend(pending);
                continue;
            }

            let value = match *node {
                Node::Constant(v) => (self.lift)(v),
                Node::Input(ref name) => match self.inputs.get(name) {
                    Some(v) => v.clone(),
                    None => return Err(Error::MissingInput { name: name.clone() }),
                },
                Node::Add(l, r) => self.memo[&l].clone() + self.memo[&r].clone(),
                Node::Mul(l, r) => self.memo[&l].clone() * self.memo[&r].clone(),
                Node::ShiftLeft(x, k) => self.memo[&x].clone() << k,
                Node::ShiftRight(x, k) => self.memo[&x].clone() >> k,
            };
            self.memo.insert(id, value);
            stack.pop();
        }
        Ok(self.memo[&root].clone())
    }
}

/// Evaluate the circuit rooted at `root` given values for its inputs.
pub fn eval<T: Semiring>(
    circuit: &Circuit,
    root: NodeId,
    inputs: &HashMap<String, T>,
    lift: impl Fn(u64) -> T,
) -> Result<T> {
    Evaluator::new(circuit, inputs, lift).eval(root)
}

/// Evaluate several outputs of one circuit, sharing work between them.
pub fn eval_many<T: Semiring>(
    circuit: &Circuit,
    roots: &[NodeId],
    inputs: &HashMap<String, T>,
    lift: impl Fn(u64) -> T,
) -> Result<Vec<T>> {
    let mut evaluator = Evaluator::new(circuit, inputs, lift);
    roots.iter().map(|&r| evaluator.eval(r)).collect()
}
