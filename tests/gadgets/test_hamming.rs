use semiring_circuits::analysis::depth;
use semiring_circuits::circuit::NodeId;
use semiring_circuits::eval::eval_many;
use semiring_circuits::gadgets::hamming::{hamming_weight, hamming_weight_add};
use semiring_circuits::pipeline::Pipeline;
use semiring_circuits::var::{Builder, Var};

use crate::theory::bit::{self, Bit};

use std::collections::HashMap;

const VECTOR: [u64; 32] = [
    1, 0, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, //
    1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
];

fn vector_inputs(values: &[u64]) -> HashMap<String, Bit> {
    values
        .iter()
        .enumerate()
        .map(|(i, &b)| (format!("v{i}"), bit::lift(b)))
        .collect()
}

#[test]
fn test_weight_of_32_bits() {
    let _ = env_logger::builder().is_test(true).try_init();

    let state = Builder::default();
    let v = Var::vector_input(&state, "v", 32);
    let weight: Vec<NodeId> = hamming_weight(&v).unwrap().iter().map(|w| w.id).collect();
    assert_eq!(weight.len(), 6);

    let mut c = state.borrow_mut();
    let inputs = vector_inputs(&VECTOR);
    let bits = eval_many(&c, &weight, &inputs, bit::lift).unwrap();
    assert_eq!(bit::to_number(&bits), 20);

    let optimised = Pipeline::default().run(&mut c, &weight);
    let bits = eval_many(&c, &optimised, &inputs, bit::lift).unwrap();
    assert_eq!(bit::to_number(&bits), 20);

    for (&before, &after) in weight.iter().zip(&optimised) {
        assert!(depth(&c, after) <= depth(&c, before));
    }
}

#[test]
fn test_both_algorithms_agree() {
    let state = Builder::default();
    let v = Var::vector_input(&state, "v", 16);
    let direct: Vec<NodeId> = hamming_weight(&v).unwrap().iter().map(|w| w.id).collect();
    let tree: Vec<NodeId> = hamming_weight_add(&v).unwrap().iter().map(|w| w.id).collect();
    assert_eq!(direct.len(), tree.len());

    let c = state.borrow();
    for values in [&VECTOR[..16], &VECTOR[16..]] {
        let inputs = vector_inputs(values);
        let expected: u64 = values.iter().sum();
        let direct_bits = eval_many(&c, &direct, &inputs, bit::lift).unwrap();
        let tree_bits = eval_many(&c, &tree, &inputs, bit::lift).unwrap();
        assert_eq!(bit::to_number(&direct_bits), expected);
        assert_eq!(bit::to_number(&tree_bits), expected);
    }
}
