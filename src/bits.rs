//! Conversions between integers and little-endian bit vectors.
use num_traits::PrimInt;

/// The low `nbits` bits of `n`, least significant first.
pub fn to_bits<T: PrimInt>(n: T, nbits: usize) -> Vec<bool> {
    let mut n = n;
    let mut bits = Vec::with_capacity(nbits);
    for _ in 0..nbits {
        bits.push(n & T::one() == T::one());
        n = n.unsigned_shr(1);
    }
    bits
}

/// The integer whose little-endian bits are `bits`.
pub fn from_bits<T: PrimInt>(bits: &[bool]) -> T {
    bits.iter().rev().fold(T::zero(), |acc, &b| {
        let acc = acc << 1;
        if b {
            acc | T::one()
        } else {
            acc
        }
    })
}

/// The number of bits needed to write any integer below `n`: `ceil(log2(n))`, and 0 for `n <= 1`.
pub fn log2_ceil(n: usize) -> usize {
    match n {
        0 | 1 => 0,
        n => (usize::BITS - (n - 1).leading_zeros()) as usize,
    }
}

/// `floor(log2(n))`. Panics if `n` is zero.
pub fn log2_floor(n: usize) -> usize {
    assert!(n > 0, "log2 of zero");
    (usize::BITS - 1 - n.leading_zeros()) as usize
}
