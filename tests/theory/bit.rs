// The field with two elements: `+` is XOR and `*` is AND.
// A single bit has no slots to shift between, so shifts are the identity.

use semiring_circuits::bits::{from_bits, to_bits};

use core::ops::{Add, Mul, Shl, Shr};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bit(pub bool);

impl Add for Bit {
    type Output = Bit;

    fn add(self, rhs: Bit) -> Bit {
        Bit(self.0 ^ rhs.0)
    }
}

impl Mul for Bit {
    type Output = Bit;

    fn mul(self, rhs: Bit) -> Bit {
        Bit(self.0 && rhs.0)
    }
}

impl Shl<usize> for Bit {
    type Output = Bit;

    fn shl(self, _: usize) -> Bit {
        self
    }
}

impl Shr<usize> for Bit {
    type Output = Bit;

    fn shr(self, _: usize) -> Bit {
        self
    }
}

pub fn lift(k: u64) -> Bit {
    Bit(k % 2 == 1)
}

// Bind the inputs "{name}0", "{name}1", ... to the little-endian bits of `value`.
pub fn add_number(inputs: &mut HashMap<String, Bit>, name: &str, value: u64, nbits: usize) {
    for (i, b) in to_bits(value, nbits).into_iter().enumerate() {
        inputs.insert(format!("{name}{i}"), Bit(b));
    }
}

// Bind each number in `values` with `add_number`, naming element `i` "{name}{i}".
pub fn add_array(inputs: &mut HashMap<String, Bit>, name: &str, values: &[u64], nbits: usize) {
    for (i, &v) in values.iter().enumerate() {
        add_number(inputs, &format!("{name}{i}"), v, nbits);
    }
}

pub fn to_number(bits: &[Bit]) -> u64 {
    let bits: Vec<bool> = bits.iter().map(|b| b.0).collect();
    from_bits(&bits)
}
