//! A higher-level interface for building circuits with *rust operators* like `+`, `*` and `<<`.
//! Here's an example of building a full adder over bits, where `+` is XOR and `*` is AND.
//!
//! ```rust
//! use semiring_circuits::var::{Builder, Var};
//!
//! fn full_adder(a: &Var, b: &Var, cin: &Var) -> (Var, Var) {
//!     let a_xor_b = a + b;
//!     let sum = &a_xor_b + cin;
//!     let cout = a * b + cin * &a_xor_b;
//!     (sum, cout)
//! }
//!
//! let state = Builder::default();
//! let xs = Var::vector_input(&state, "x", 3);
//! let (sum, cout) = full_adder(&xs[0], &xs[1], &xs[2]);
//!
//! let circuit = state.borrow();
//! assert_eq!(circuit.display(sum.id).to_string(), "( ( x0 + x1 ) + x2 )");
//! ```
//!
//! Each operator appends one gate to the shared [`crate::circuit::Circuit`], after the same
//! constant folding as [`crate::circuit::Circuit::add`] and [`crate::circuit::Circuit::mul`]:
//! only the left operand is inspected, so `zero + x` is `x` but `x + zero` is a gate.

mod operators;
mod var;

pub use var::*;
