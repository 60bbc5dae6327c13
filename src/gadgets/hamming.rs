//! Hamming weight (population count) of a bit vector.
use super::arith::ripple_add;
use super::sum;
use crate::bits::log2_floor;
use crate::error::{Error, Result};
use crate::var::Var;

/// The number of set bits in `v`, as a little-endian number of `floor(log2(n)) + 1` bits.
///
/// Works for any length. Each round splits the current bits into groups of three (plus a
/// shorter leftover group), emits the parity of all of them as the next result bit, and keeps
/// the bits that carry into the next position: the majority of each group, the product of a
/// two-bit leftover, and the pairwise products of the group parities.
pub fn hamming_weight(v: &[Var]) -> Result<Vec<Var>> {
    if v.is_empty() {
        return Err(Error::EmptyOperand);
    }
    let zero = || v[0].zero();
    let width = log2_floor(v.len()) + 1;

    let mut bits = v.to_vec();
    let mut result = Vec::with_capacity(width);
    for _ in 0..width {
        let rem = bits.len() % 3;
        let (groups, left_over) = bits.split_at(bits.len() - rem);

        let mut sums: Vec<Var> = groups.chunks(3).map(|g| &g[0] + &g[1] + &g[2]).collect();
        if rem != 0 {
            sums.push(sum(zero(), left_over.iter().cloned()));
        }
        result.push(sum(zero(), sums.iter().cloned()));

        let mut carries: Vec<Var> = groups
            .chunks(3)
            .map(|g| &g[0] * &g[1] + &g[0] * &g[2] + &g[1] * &g[2])
            .collect();
        if rem == 2 {
            carries.push(&left_over[1] * &left_over[0]);
        }
        for (j, s) in sums.iter().enumerate() {
            carries.push(sum(zero(), sums[j + 1..].iter().map(|t| s * t)));
        }
        bits = carries;
    }
    Ok(result)
}

/// The number of set bits in `v`, summed pairwise by a tree of [`ripple_add`]ers.
///
/// The length of `v` must be a power of two; the result has `log2(n) + 1` bits.
pub fn hamming_weight_add(v: &[Var]) -> Result<Vec<Var>> {
    if v.is_empty() {
        return Err(Error::EmptyOperand);
    }
    if !v.len().is_power_of_two() {
        return Err(Error::NotPowerOfTwo(v.len()));
    }

    let mut elems: Vec<Vec<Var>> = v.iter().map(|x| vec![x.clone()]).collect();
    while elems.len() > 1 {
        elems = elems
            .chunks(2)
            .map(|pair| ripple_add(&pair[0], &pair[1]))
            .collect::<Result<_>>()?;
    }
    elems.into_iter().next().ok_or(Error::EmptyOperand)
}
