use semiring_circuits::circuit::Circuit;
use semiring_circuits::error::Error;
use semiring_circuits::eval::{eval, eval_many, Evaluator};

use crate::theory::bit::{self, Bit};
use crate::theory::slots::Slots;

use std::collections::HashMap;

#[test]
fn test_eval_over_bits() {
    let mut c = Circuit::empty();
    let x = c.input("x");
    let y = c.input("y");
    let one = c.constant(1);
    let xy = c.mul(x, y);
    let s = c.add(xy, x);
    let out = c.add(s, one);

    for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
        let inputs = HashMap::from([("x".to_string(), Bit(a)), ("y".to_string(), Bit(b))]);
        let expected = !(a && !b);
        assert_eq!(eval(&c, out, &inputs, bit::lift), Ok(Bit(expected)));
    }
}

#[test]
fn test_eval_shifts_rotate_slots() {
    let mut c = Circuit::empty();
    let x = c.input("x");
    let left = c.shift_left(x, 1);
    let right = c.shift_right(x, 3);
    let one = c.constant(1);
    let masked = c.mul(right, one);

    let slot = |bits: [u8; 4]| Slots(bits.iter().map(|&b| b == 1).collect());
    let inputs = HashMap::from([("x".to_string(), slot([1, 1, 0, 0]))]);
    let values = eval_many(&c, &[left, masked], &inputs, |k| Slots::splat(k % 2 == 1, 4));

    assert_eq!(values, Ok(vec![slot([1, 0, 0, 1]), slot([1, 0, 0, 1])]));
}

#[test]
fn test_missing_input_is_reported() {
    let mut c = Circuit::empty();
    let x = c.input("x");
    let z = c.input("z");
    let out = c.mul(x, z);

    let inputs = HashMap::from([("x".to_string(), Bit(true))]);
    assert_eq!(
        eval(&c, out, &inputs, bit::lift),
        Err(Error::MissingInput {
            name: "z".to_string()
        })
    );

    // subcircuits that do not use the input still evaluate
    let mut evaluator = Evaluator::new(&c, &inputs, bit::lift);
    assert!(evaluator.eval(out).is_err());
    assert_eq!(evaluator.eval(x), Ok(Bit(true)));
}
