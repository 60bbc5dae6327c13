//! Comparison and selection over bits and little-endian bit vectors.
use super::common_len;
use crate::bits::to_bits;
use crate::error::Result;
use crate::var::{Builder, Var};

/// `1 + x`
pub fn lnot(x: &Var) -> Var {
    x + x.one()
}

/// `x * y + x + y`
pub fn lor(x: &Var, y: &Var) -> Var {
    x * y + x + y
}

/// 1 when the bits `x` and `y` are equal.
pub fn eq1(x: &Var, y: &Var) -> Var {
    x + y + x.one()
}

/// 1 when the bit `x` is less than the bit `y`.
pub fn lt1(x: &Var, y: &Var) -> Var {
    lnot(x) * y
}

/// 1 when the bit vectors `xs` and `ys` are equal.
pub fn eq(xs: &[Var], ys: &[Var]) -> Result<Var> {
    common_len(xs, ys)?;
    Ok(xs
        .iter()
        .zip(ys)
        .fold(xs[0].one(), |acc, (x, y)| acc * eq1(x, y)))
}

/// 1 when the little-endian number `xs` is less than `ys`.
///
/// Bits are compared from the most significant one down: `xs < ys` if, at some position, `xs`
/// has a 0 where `ys` has a 1 and all higher bits are equal.
pub fn lt(xs: &[Var], ys: &[Var]) -> Result<Var> {
    let n = common_len(xs, ys)?;
    let mut is_lt = lt1(&xs[n - 1], &ys[n - 1]);
    let mut is_eq = xs[0].one();
    for i in (0..n - 1).rev() {
        is_eq *= eq1(&xs[i + 1], &ys[i + 1]);
        is_lt += &is_eq * lt1(&xs[i], &ys[i]);
    }
    Ok(is_lt)
}

/// `alt0` when `sel` is 0 and `alt1` when `sel` is 1.
pub fn mux1(sel: &Var, alt0: &Var, alt1: &Var) -> Var {
    lnot(sel) * alt0 + sel * alt1
}

/// [`mux1`] applied to each bit of two vectors.
pub fn mux(sel: &Var, alt0: &[Var], alt1: &[Var]) -> Result<Vec<Var>> {
    common_len(alt0, alt1)?;
    Ok(alt0
        .iter()
        .zip(alt1)
        .map(|(a0, a1)| mux1(sel, a0, a1))
        .collect())
}

/// The low `nbits` bits of `n` as constant nodes.
pub fn constant_bits(state: &Builder, n: u64, nbits: usize) -> Vec<Var> {
    to_bits(n, nbits)
        .into_iter()
        .map(|b| Var::constant(state, b as u64))
        .collect()
}
