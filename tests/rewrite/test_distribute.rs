use semiring_circuits::analysis::gate_count;
use semiring_circuits::circuit::{Circuit, GateKinds, NodeId};
use semiring_circuits::rewrite::{distribute, expand, insert_mul, simplify, Simplifier};

use crate::circuit::strategy::{arb_inputs, arb_linear_recipe, arb_recipe, value};

use proptest::proptest;

// No multiplication below `root` has an addition as an operand.
fn is_sum_of_products(c: &Circuit, root: NodeId) -> bool {
    c.reachable(root).into_iter().all(|id| match c.node(id).as_mul() {
        Some((l, r)) => c.node(l).as_add().is_none() && c.node(r).as_add().is_none(),
        None => true,
    })
}

proptest! {
    #[test]
    fn test_simplify_preserves_value(recipe in arb_recipe(), inputs in arb_inputs()) {
        let (mut c, root) = recipe.build();
        let s = simplify(&mut c, root);
        assert_eq!(value(&c, s, &inputs), value(&c, root, &inputs));
    }

    #[test]
    fn test_expand_gives_sum_of_products(recipe in arb_linear_recipe(), inputs in arb_inputs()) {
        let (mut c, root) = recipe.build();
        let e = expand(&mut c, root);

        assert!(is_sum_of_products(&c, e));
        assert_eq!(value(&c, e, &inputs), value(&c, root, &inputs));
    }

    #[test]
    fn test_expand_then_simplify(recipe in arb_linear_recipe(), inputs in arb_inputs()) {
        let (mut c, root) = recipe.build();
        let e = expand(&mut c, root);
        let s = simplify(&mut c, e);
        assert_eq!(value(&c, s, &inputs), value(&c, root, &inputs));
    }

    #[test]
    fn test_distribute_preserves_value(recipe in arb_recipe(), inputs in arb_inputs()) {
        let (mut c, root) = recipe.build();
        if let Some(d) = distribute(&mut c, root) {
            assert_eq!(value(&c, d, &inputs), value(&c, root, &inputs));
        }
        let k = c.input("a");
        let spread = insert_mul(&mut c, k, root);
        let product = c.mul(k, root);
        assert_eq!(value(&c, spread, &inputs), value(&c, product, &inputs));
    }
}

#[test]
fn test_factor_out_carry() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut c = Circuit::empty();
    let [a, b, cin] = ["a", "b", "c"].map(|n| c.input(n));
    let ca = c.mul(cin, a);
    let cb = c.mul(cin, b);
    let out = c.add(ca, cb);

    let s = simplify(&mut c, out);
    assert_eq!(c.display(s).to_string(), "( ( a + b ) * c )");
    assert_eq!(gate_count(&c, s, GateKinds::MUL), 1);
}

#[test]
fn test_factor_several_operands() {
    let mut c = Circuit::empty();
    let [x, y, p, q] = ["x", "y", "p", "q"].map(|n| c.input(n));
    let xy = c.mul(x, y);
    let xyp = c.mul(xy, p);
    let yx = c.mul(y, x);
    let yxq = c.mul(yx, q);
    let out = c.add(xyp, yxq);

    let mut pass = Simplifier::new();
    let s = pass.simplify(&mut c, out);
    assert_eq!(c.display(s).to_string(), "( ( p + q ) * ( x * y ) )");

    // the pass remembers its result
    assert_eq!(pass.simplify(&mut c, out), s);
}

#[test]
fn test_factoring_exposes_more_factoring() {
    // (x*a + x*b) * y + (x*d) * y
    let mut c = Circuit::empty();
    let [x, y, a, b, d] = ["x", "y", "a", "b", "d"].map(|n| c.input(n));
    let xa = c.mul(x, a);
    let xb = c.mul(x, b);
    let inner = c.add(xa, xb);
    let left = c.mul(inner, y);
    let xd = c.mul(x, d);
    let right = c.mul(xd, y);
    let out = c.add(left, right);

    let s = simplify(&mut c, out);
    // the inner sum becomes a product, whose factor x is then shared with the right side
    assert_eq!(
        c.display(s).to_string(),
        "( ( ( a + b ) + d ) * ( x * y ) )"
    );
}
