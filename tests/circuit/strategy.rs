use semiring_circuits::circuit::{Circuit, NodeId};
use semiring_circuits::eval::eval;

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};

use std::collections::HashMap;
use std::num::Wrapping;

/// Names of the inputs every random circuit starts from.
pub const INPUTS: [&str; 4] = ["a", "b", "c", "d"];

/// One step of building a random circuit.
///
/// Operands are indices into the list of nodes built so far (the inputs first), taken modulo
/// its length, so any sequence of steps is a valid recipe.
#[derive(Debug, Clone)]
pub enum Step {
    Constant(u64),
    Add(usize, usize),
    Mul(usize, usize),
    ShiftLeft(usize, usize),
    ShiftRight(usize, usize),
}

/// A random circuit whose root is the node built by the last step.
#[derive(Debug, Clone)]
pub struct Recipe(pub Vec<Step>);

impl Recipe {
    pub fn build(&self) -> (Circuit, NodeId) {
        let mut c = Circuit::empty();
        let root = self.build_into(&mut c, false);
        (c, root)
    }

    /// Build the recipe into `c` with fresh input nodes. With `mirrored`, the operands of every
    /// `+` and `*` are swapped.
    pub fn build_into(&self, c: &mut Circuit, mirrored: bool) -> NodeId {
        let mut built: Vec<NodeId> = INPUTS.iter().map(|name| c.input(*name)).collect();
        for step in &self.0 {
            let pick = |i: usize| built[i % built.len()];
            let ordered = |l: usize, r: usize| {
                if mirrored {
                    (pick(r), pick(l))
                } else {
                    (pick(l), pick(r))
                }
            };
            let id = match *step {
                Step::Constant(k) => c.constant(k),
                Step::Add(l, r) => {
                    let (l, r) = ordered(l, r);
                    c.add(l, r)
                }
                Step::Mul(l, r) => {
                    let (l, r) = ordered(l, r);
                    c.mul(l, r)
                }
                Step::ShiftLeft(x, k) => c.shift_left(pick(x), k),
                Step::ShiftRight(x, k) => c.shift_right(pick(x), k),
            };
            built.push(id);
        }
        built[built.len() - 1]
    }

    /// The same recipe with every constant moved out of the range that the circuit builders
    /// fold (0 and 1), so that mirrored builds stay structurally equal.
    pub fn without_folding(&self) -> Recipe {
        let steps = self
            .0
            .iter()
            .map(|step| match *step {
                Step::Constant(k) => Step::Constant(k + 2),
                ref other => other.clone(),
            })
            .collect();
        Recipe(steps)
    }
}

fn arb_operand() -> BoxedStrategy<usize> {
    (0..16usize).boxed()
}

fn arb_shift() -> BoxedStrategy<Step> {
    prop_oneof![
        (arb_operand(), 0..4usize).prop_map(|(x, k)| Step::ShiftLeft(x, k)),
        (arb_operand(), 0..4usize).prop_map(|(x, k)| Step::ShiftRight(x, k)),
    ]
    .boxed()
}

pub fn arb_step() -> BoxedStrategy<Step> {
    prop_oneof![
        1 => (0..4u64).prop_map(Step::Constant),
        3 => (arb_operand(), arb_operand()).prop_map(|(l, r)| Step::Add(l, r)),
        4 => (arb_operand(), arb_operand()).prop_map(|(l, r)| Step::Mul(l, r)),
        1 => arb_shift(),
    ]
    .boxed()
}

/// Like [`arb_step`], but the right operand of every multiplication is one of the inputs.
///
/// Products of two sums are what makes expansion exponential; this keeps expanded circuits
/// small enough to test.
pub fn arb_linear_step() -> BoxedStrategy<Step> {
    prop_oneof![
        1 => (0..4u64).prop_map(Step::Constant),
        3 => (arb_operand(), arb_operand()).prop_map(|(l, r)| Step::Add(l, r)),
        4 => (arb_operand(), 0..INPUTS.len()).prop_map(|(l, r)| Step::Mul(l, r)),
        1 => arb_shift(),
    ]
    .boxed()
}

pub fn arb_recipe() -> BoxedStrategy<Recipe> {
    vec(arb_step(), 1..=10).prop_map(Recipe).boxed()
}

pub fn arb_linear_recipe() -> BoxedStrategy<Recipe> {
    vec(arb_linear_step(), 1..=10).prop_map(Recipe).boxed()
}

pub type Inputs = HashMap<String, Wrapping<u64>>;

pub fn arb_inputs() -> BoxedStrategy<Inputs> {
    prop::array::uniform4(any::<u64>())
        .prop_map(|values| {
            INPUTS
                .iter()
                .zip(values)
                .map(|(name, v)| (name.to_string(), Wrapping(v)))
                .collect()
        })
        .boxed()
}

/// Evaluate `root` over the integers modulo 2^64.
pub fn value(c: &Circuit, root: NodeId, inputs: &Inputs) -> Wrapping<u64> {
    eval(c, root, inputs, Wrapping).unwrap()
}
