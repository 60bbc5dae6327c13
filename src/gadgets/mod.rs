//! Boolean and arithmetic building blocks over bits.
//!
//! Gadgets are written with the [`crate::var::Var`] operators, reading `+` as XOR and `*` as AND,
//! so they compute the intended function whenever inputs are evaluated over GF(2) (or over any
//! value domain whose elements behave as vectors of such bits). Multi-bit numbers are
//! little-endian slices of [`Var`]s: index 0 holds the least significant bit.
//!
//! Operations on several vectors return an [`crate::Error`] when their lengths do not fit
//! together; gadgets never panic on bad lengths.
pub mod arith;
pub mod hamming;
pub mod logic;
pub mod sort;

use crate::error::{Error, Result};
use crate::var::Var;

// The common length of `xs` and `ys`, which must be non-empty.
pub(crate) fn common_len<A, B>(xs: &[A], ys: &[B]) -> Result<usize> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(Error::EmptyOperand);
    }
    Ok(xs.len())
}

// `zero + t0 + t1 + ...`; the leading zero folds away unless `terms` is empty.
pub(crate) fn sum(zero: Var, terms: impl IntoIterator<Item = Var>) -> Var {
    terms.into_iter().fold(zero, |acc, t| acc + t)
}
