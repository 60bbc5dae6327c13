//! Binary adders.
use super::common_len;
use crate::error::Result;
use crate::var::Var;

/// Sum and carry of two bits.
pub fn half_adder(a: &Var, b: &Var) -> (Var, Var) {
    (a + b, a * b)
}

/// Sum and carry of three bits.
///
/// The carry is written as `ab + ca + cb + cab + cba`, which is the majority of the three
/// bits over GF(2).
pub fn full_adder(a: &Var, b: &Var, carry_in: &Var) -> (Var, Var) {
    let sum = a + b + carry_in;

    let t1 = carry_in * a;
    let t2 = carry_in * b;
    let t3 = &t1 * b;
    let t4 = &t2 * a;
    let carry = a * b + t1 + t2 + t3 + t4;
    (sum, carry)
}

/// Add two little-endian numbers of the same width `n`, giving `n + 1` bits with the carry last.
pub fn ripple_add(a: &[Var], b: &[Var]) -> Result<Vec<Var>> {
    let n = common_len(a, b)?;
    let (s, mut carry) = half_adder(&a[0], &b[0]);
    let mut result = Vec::with_capacity(n + 1);
    result.push(s);
    for i in 1..n {
        let (s, c) = full_adder(&a[i], &b[i], &carry);
        result.push(s);
        carry = c;
    }
    result.push(carry);
    Ok(result)
}
