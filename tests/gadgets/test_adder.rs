use semiring_circuits::analysis::max_depth;
use semiring_circuits::circuit::NodeId;
use semiring_circuits::eval::eval_many;
use semiring_circuits::gadgets::arith::ripple_add;
use semiring_circuits::rewrite::reduce_depth_many;
use semiring_circuits::var::{Builder, Var};

use crate::theory::bit::{self, Bit};

use std::collections::HashMap;

fn ids(vars: &[Var]) -> Vec<NodeId> {
    vars.iter().map(|v| v.id).collect()
}

#[test]
fn test_ripple_add_8_bits() {
    let _ = env_logger::builder().is_test(true).try_init();

    let state = Builder::default();
    let xs = Var::vector_input(&state, "x", 8);
    let ys = Var::vector_input(&state, "y", 8);
    let sum = ids(&ripple_add(&xs, &ys).unwrap());
    assert_eq!(sum.len(), 9);

    let mut c = state.borrow_mut();
    let reduced = reduce_depth_many(&mut c, &sum);
    assert!(max_depth(&c, &reduced) <= max_depth(&c, &sum));

    for (a, b) in [(200, 55), (200, 100), (0, 0), (255, 255), (17, 94)] {
        let mut inputs = HashMap::new();
        bit::add_number(&mut inputs, "x", a, 8);
        bit::add_number(&mut inputs, "y", b, 8);

        for roots in [&sum, &reduced] {
            let bits = eval_many(&c, roots, &inputs, bit::lift).unwrap();
            assert_eq!(bit::to_number(&bits[..8]), (a + b) % 256, "{a} + {b}");
            assert_eq!(bits[8], Bit(a + b > 255), "carry of {a} + {b}");
        }
    }
}
