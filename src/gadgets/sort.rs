//! Sorting arrays of little-endian numbers.
//!
//! [`sn_sort`] follows a sorting network with one compare-and-swap per comparator, so its depth
//! grows with the depth of the network. [`direct_sort`] computes every element's rank in one
//! round of comparisons and then selects the element of each rank, which keeps the
//! multiplicative depth low at the cost of more gates.
use super::hamming::hamming_weight;
use super::logic::{constant_bits, eq, lt, mux};
use crate::bits::log2_ceil;
use crate::error::{Error, Result};
use crate::var::Var;

// Checks that `xs` is a non-empty array of non-empty numbers of equal width; returns the width.
fn element_width(xs: &[Vec<Var>]) -> Result<usize> {
    let first = xs.first().ok_or(Error::EmptyOperand)?;
    if first.is_empty() {
        return Err(Error::EmptyOperand);
    }
    match xs.iter().find(|x| x.len() != first.len()) {
        Some(x) => Err(Error::LengthMismatch {
            left: first.len(),
            right: x.len(),
        }),
        None => Ok(first.len()),
    }
}

/// Sort `elements` into ascending order with the comparators `(i, j)` of a sorting network.
///
/// Each comparator leaves the smaller of elements `i` and `j` at `i` and the larger at `j`.
pub fn sn_sort(network: &[(usize, usize)], elements: &[Vec<Var>]) -> Result<Vec<Vec<Var>>> {
    let len = elements.len();
    let out_of_range = network
        .iter()
        .flat_map(|&(i, j)| [i, j])
        .find(|&index| index >= len);
    if let Some(index) = out_of_range {
        return Err(Error::IndexOutOfRange { index, len });
    }

    let mut elements = elements.to_vec();
    for &(i, j) in network {
        let is_lt = lt(&elements[i], &elements[j])?;
        let min = mux(&is_lt, &elements[j], &elements[i])?;
        let max = mux(&is_lt, &elements[i], &elements[j])?;
        elements[i] = min;
        elements[j] = max;
    }
    Ok(elements)
}

/// Sort `xs` into ascending order by rank.
///
/// Element `i` is preceded by every smaller element and by every equal element after it, so
/// ranks are distinct even when elements repeat. Output `r` is the sum, over all elements, of
/// the element masked by "its rank is `r`".
pub fn direct_sort(xs: &[Vec<Var>]) -> Result<Vec<Vec<Var>>> {
    let nbits = element_width(xs)?;
    let n = xs.len();
    if n == 1 {
        return Ok(xs.to_vec());
    }
    let state = &xs[0][0].state;
    let zero = xs[0][0].zero();
    let log_n = log2_ceil(n);

    // precedes[i][j] is 1 when element j goes before element i
    let mut precedes = vec![vec![zero.clone(); n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let less = lt(&xs[i], &xs[j])?;
            precedes[i][j] = &less + less.one();
            precedes[j][i] = less;
        }
    }

    let mut ranks = Vec::with_capacity(n);
    for row in &precedes {
        let mut rank = hamming_weight(row)?;
        rank.truncate(log_n);
        ranks.push(rank);
    }

    (0..n)
        .map(|r| {
            let target = constant_bits(state, r as u64, log_n);
            let mut out = vec![zero.clone(); nbits];
            for (x, rank) in xs.iter().zip(&ranks) {
                let z = eq(&target, rank)?;
                for (o, bit) in out.iter_mut().zip(x) {
                    *o += &z * bit;
                }
            }
            Ok(out)
        })
        .collect()
}

/// Pack `elems` into one value with `elems[j]` in slot `j`, assuming each element holds its
/// value in slot 0 and `>>` rotates slots towards higher indices.
pub fn fill_slots_with_list(elems: &[Var], nslots: usize) -> Result<Var> {
    if elems.len() != nslots {
        return Err(Error::LengthMismatch {
            left: elems.len(),
            right: nslots,
        });
    }
    let first = elems.first().ok_or(Error::EmptyOperand)?;

    let mut v = first.zero();
    for e in elems.iter().rev() {
        v = (v >> 1) + e;
    }
    Ok(v)
}

/// Copy the slot-0 value of `x` into all `nslots` slots.
pub fn fill_slots_with_elem(x: &Var, nslots: usize) -> Var {
    let mut v = x.zero();
    for _ in 0..nslots {
        v = (v << 1) + x;
    }
    v
}

/// [`direct_sort`] for slot-packed values.
///
/// Meant for value domains where each value is a vector of `n` slots (`n = xs.len()`), `+` and
/// `*` act slot-wise, `<<`/`>>` rotate by whole slots, and constants fill every slot. Every input
/// bit must hold its value in slot 0. All pairwise comparisons then share one `lt` per element,
/// and the sorted bits come out in slot 0. Elements must be distinct.
pub fn direct_sort_packed(xs: &[Vec<Var>]) -> Result<Vec<Vec<Var>>> {
    let nbits = element_width(xs)?;
    let n = xs.len();
    if n == 1 {
        return Ok(xs.to_vec());
    }
    let state = &xs[0][0].state;
    let zero = xs[0][0].zero();
    let log_n = log2_ceil(n);

    // slot j of packed[k] is bit k of element j
    let packed: Vec<Var> = (0..nbits)
        .map(|k| {
            let column: Vec<Var> = xs.iter().map(|x| x[k].clone()).collect();
            fill_slots_with_list(&column, n)
        })
        .collect::<Result<_>>()?;

    // slot j of less[i] is 1 when element i is smaller than element j
    let less: Vec<Var> = xs
        .iter()
        .map(|x| {
            let broadcast: Vec<Var> = x.iter().map(|b| fill_slots_with_elem(b, n)).collect();
            lt(&broadcast, &packed)
        })
        .collect::<Result<_>>()?;

    let mut ranks = hamming_weight(&less)?;
    ranks.truncate(log_n);

    (0..n)
        .map(|r| {
            let mut z = eq(&constant_bits(state, r as u64, log_n), &ranks)?;
            let mut out = vec![zero.clone(); nbits];
            for x in xs {
                for (o, bit) in out.iter_mut().zip(x) {
                    *o += &z * bit;
                }
                z <<= 1;
            }
            Ok(out)
        })
        .collect()
}
