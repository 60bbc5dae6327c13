//! # Semiring Circuits
//!
//! A [Circuit](crate::circuit::Circuit) is a directed acyclic graph of additions,
//! multiplications and shifts over a commutative semiring, with named inputs and integer
//! constants at the leaves. Circuits are built once, rewritten by optimisation passes, and
//! evaluated over any value type implementing [Semiring](crate::eval::Semiring).
//!
//! The cost model is that of leveled homomorphic encryption: additions and shifts are cheap,
//! while every multiplication on a path consumes noise budget. The passes therefore aim to
//! reduce *multiplicative depth*, the largest number of multiplications on any path from an
//! output to a leaf.
//!
//! ```text
//!     ((x0 * x1) * x2) * x3          (x0 * x1) * (x2 * x3)
//!          depth 3          ──▶           depth 2
//! ```
//!
//! # Example
//!
//! Circuits are most easily written with [Var](crate::var::Var), which overloads `+`, `*`, `<<`
//! and `>>`. Here we build a product of four inputs, rebalance it, and evaluate it over
//! integers:
//!
//! ```rust
//! use semiring_circuits::prelude::*;
//! use std::collections::HashMap;
//!
//! let state = Builder::default();
//! let xs = Var::vector_input(&state, "x", 4);
//! let product = xs.iter().skip(1).fold(xs[0].clone(), |acc, x| acc * x);
//!
//! let mut circuit = state.borrow_mut();
//! assert_eq!(depth(&circuit, product.id), 3);
//!
//! let balanced = reduce_depth(&mut circuit, product.id);
//! assert_eq!(depth(&circuit, balanced), 2);
//!
//! let inputs: HashMap<String, u64> = (0..4).map(|i| (format!("x{i}"), i + 2)).collect();
//! assert_eq!(eval(&circuit, balanced, &inputs, |k| k), Ok(2 * 3 * 4 * 5));
//! ```
//!
//! # Passes
//!
//! Each pass appends new nodes to the circuit and returns a new root, leaving the old root
//! intact (see [rewrite](crate::rewrite)):
//!
//! - [dedup](crate::rewrite::dedup) merges structurally equal subcircuits,
//! - [reduce_depth](crate::rewrite::reduce_depth) rebalances chains of multiplications,
//! - [simplify](crate::rewrite::simplify) factors common multiplicands out of sums, and
//! - [expand](crate::rewrite::expand) distributes products over sums.
//!
//! [Pipeline](crate::pipeline::Pipeline) runs a selection of them over all outputs of a circuit.
//! The [gadgets](crate::gadgets) module contains bit-level building blocks (comparators,
//! adders, population count, sorting) written with `Var`.

pub mod analysis;
pub mod bits;
pub mod circuit;
pub mod equality;
pub mod error;
pub mod eval;
pub mod gadgets;
pub mod pipeline;
pub mod rewrite;
pub mod var;

pub use error::{Error, Result};

pub mod prelude {
    //! The types and free functions needed to build, optimise and evaluate circuits.
    pub use crate::analysis::{depth, gate_count, max_depth};
    pub use crate::circuit::{Circuit, GateKinds, Node, NodeId};
    pub use crate::equality::equal;
    pub use crate::error::{Error, Result};
    pub use crate::eval::{eval, eval_many, Semiring};
    pub use crate::pipeline::{Pipeline, Stats};
    pub use crate::rewrite::{build_mul_tree, dedup, expand, reduce_depth, simplify};
    pub use crate::var::{Builder, Var};
}
