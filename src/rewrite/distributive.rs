use super::{balanced_product, flatten_add_operands, relink, BottomUp, Sharing};
use crate::analysis::Depths;
use crate::circuit::{Circuit, NodeId};
use crate::equality::Equality;

use log::{debug, trace};
use std::collections::HashMap;

/// Factor common multiplicands out of additions: `p*x + q*x` becomes `(p + q) * x`.
///
/// For every addition whose operands are both multiplications, the factors of each side are
/// flattened and matched pairwise with structural equality (each factor on the right is matched
/// at most once, in left-to-right order). Matched factors form the common factor; what is left
/// on each side is multiplied back together, or is the constant 1 when nothing is left. A
/// multiplication with several parents is matched as a whole rather than flattened. The pass
/// works bottom-up, so factored subterms can expose further common factors above them.
#[derive(Debug, Clone, Default)]
pub struct Simplifier {
    simplified: HashMap<NodeId, NodeId>,
    equality: Equality,
    depths: Depths,
    sharing: Sharing,
}

impl Simplifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simplify(&mut self, circuit: &mut Circuit, root: NodeId) -> NodeId {
        self.sharing.scan(circuit, root);
        let result = self.run(circuit, root);
        debug!("simplify: {root:?} -> {result:?}");
        result
    }

    // Factor `id` if it is a sum of two products with a common factor.
    fn factor_sum(&mut self, circuit: &mut Circuit, id: NodeId) -> Option<NodeId> {
        let (l, r) = circuit.node(id).as_add()?;
        let (l, r) = (self.simplified[&l], self.simplified[&r]);
        let products = circuit.node(l).as_mul().is_some() && circuit.node(r).as_mul().is_some();
        if !products {
            return None;
        }
        self.factor(circuit, l, r)
    }

    // Factor `l + r` if the products `l` and `r` share a factor.
    fn factor(&mut self, circuit: &mut Circuit, l: NodeId, r: NodeId) -> Option<NodeId> {
        let left = self.sharing.mul_factors(circuit, l);
        let right = self.sharing.mul_factors(circuit, r);

        let mut used = vec![false; right.len()];
        let mut common = vec![];
        let mut rest_left = vec![];
        for &x in &left {
            let found = (0..right.len())
                .find(|&j| !used[j] && self.equality.equal(circuit, x, right[j]));
            match found {
                Some(j) => {
                    used[j] = true;
                    common.push(x);
                }
                None => rest_left.push(x),
            }
        }
        if common.is_empty() {
            return None;
        }

        let rest_right: Vec<NodeId> = right
            .into_iter()
            .zip(used)
            .filter_map(|(x, u)| (!u).then_some(x))
            .collect();
        trace!(
            "factored {} common operands out of {:?} + {:?}",
            common.len(),
            l,
            r
        );

        let rest_left = balanced_product(circuit, &mut self.depths, rest_left);
        let rest_right = balanced_product(circuit, &mut self.depths, rest_right);
        let common = balanced_product(circuit, &mut self.depths, common);
        let sum = circuit.add(rest_left, rest_right);
        Some(circuit.mul(sum, common))
    }
}

impl BottomUp for Simplifier {
    fn memo(&self) -> &HashMap<NodeId, NodeId> {
        &self.simplified
    }

    fn memo_mut(&mut self) -> &mut HashMap<NodeId, NodeId> {
        &mut self.simplified
    }

    fn rebuild(&mut self, circuit: &mut Circuit, id: NodeId) -> NodeId {
        let result = self
            .factor_sum(circuit, id)
            .unwrap_or_else(|| relink(circuit, &self.simplified, id));
        self.sharing.inherit(id, result);
        result
    }
}

/// Distribute a multiplication over one of its operands, if that operand is an addition:
/// `k * (x + y)` becomes `k*x + k*y` and `(x + y) * k` becomes `x*k + y*k`.
///
/// When both operands are additions only the left one is distributed. Returns `None` when
/// `root` is not a multiplication with an addition operand.
pub fn distribute(circuit: &mut Circuit, root: NodeId) -> Option<NodeId> {
    let (l, r) = circuit.node(root).as_mul()?;
    if let Some((x, y)) = circuit.node(l).as_add() {
        let xk = circuit.mul(x, r);
        let yk = circuit.mul(y, r);
        return Some(circuit.add(xk, yk));
    }
    let (x, y) = circuit.node(r).as_add()?;
    let kx = circuit.mul(l, x);
    let ky = circuit.mul(l, y);
    Some(circuit.add(kx, ky))
}

/// Multiply every addend of `term` by `factor`: `insert_mul(k, x + y + z)` is `k*x + k*y + k*z`.
///
/// Addends are found by flattening the additions at the top of `term`; a `term` that is not an
/// addition is its only addend.
pub fn insert_mul(circuit: &mut Circuit, factor: NodeId, term: NodeId) -> NodeId {
    let products: Vec<NodeId> = flatten_add_operands(circuit, term)
        .into_iter()
        .map(|t| circuit.mul(factor, t))
        .collect();
    sum(circuit, products)
}

// Left-leaning sum of `terms`; the empty sum is the constant 0.
fn sum(circuit: &mut Circuit, terms: Vec<NodeId>) -> NodeId {
    terms
        .into_iter()
        .reduce(|acc, t| circuit.add(acc, t))
        .unwrap_or_else(|| circuit.constant(0))
}

/// Expand a circuit into a sum of products by distributing every multiplication over
/// additions below it.
///
/// In the result no multiplication has an addition as an operand. Shifts are left in place and
/// their operands are expanded separately. The expanded form can be exponentially larger than
/// the input.
#[derive(Debug, Clone, Default)]
pub struct Expander {
    expanded: HashMap<NodeId, NodeId>,
}

impl Expander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand(&mut self, circuit: &mut Circuit, root: NodeId) -> NodeId {
        let result = self.run(circuit, root);
        debug!("expand: {root:?} -> {result:?}");
        result
    }
}

impl BottomUp for Expander {
    fn memo(&self) -> &HashMap<NodeId, NodeId> {
        &self.expanded
    }

    fn memo_mut(&mut self) -> &mut HashMap<NodeId, NodeId> {
        &mut self.expanded
    }

    fn rebuild(&mut self, circuit: &mut Circuit, id: NodeId) -> NodeId {
        let Some((l, r)) = circuit.node(id).as_mul() else {
            return relink(circuit, &self.expanded, id);
        };
        let (l, r) = (self.expanded[&l], self.expanded[&r]);
        let distributes =
            circuit.node(l).as_add().is_some() || circuit.node(r).as_add().is_some();
        if !distributes {
            return relink(circuit, &self.expanded, id);
        }

        // both operands are already sums of products
        trace!("distributing {id:?}");
        let terms: Vec<NodeId> = flatten_add_operands(circuit, l)
            .into_iter()
            .map(|a| insert_mul(circuit, a, r))
            .collect();
        sum(circuit, terms)
    }
}

/// Factor common multiplicands out of additions in `root`; see [`Simplifier`].
pub fn simplify(circuit: &mut Circuit, root: NodeId) -> NodeId {
    Simplifier::new().simplify(circuit, root)
}

/// Expand `root` into a sum of products; see [`Expander`].
pub fn expand(circuit: &mut Circuit, root: NodeId) -> NodeId {
    Expander::new().expand(circuit, root)
}
