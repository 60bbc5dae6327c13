//! Running several passes over all outputs of a circuit.
use crate::analysis::{gate_count_many, max_depth};
use crate::circuit::{Circuit, GateKinds, NodeId};
use crate::rewrite::{dedup_many, DepthReducer, Expander, Simplifier};

use log::{debug, log_enabled, Level};
use std::fmt;

/// Which passes to run, in the fixed order expand, simplify, reduce depth, dedup.
///
/// The default reduces depth and then removes duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Pipeline {
    pub expand: bool,
    pub simplify: bool,
    pub reduce_depth: bool,
    pub dedup: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline {
            expand: false,
            simplify: false,
            reduce_depth: true,
            dedup: true,
        }
    }
}

impl Pipeline {
    /// No passes at all.
    pub fn none() -> Self {
        Pipeline {
            expand: false,
            simplify: false,
            reduce_depth: false,
            dedup: false,
        }
    }

    /// Rewrite every root in `roots`, returning the new roots in the same order.
    ///
    /// Each pass uses one pass object for all roots, so subcircuits shared between outputs are
    /// rewritten once and stay shared.
    pub fn run(&self, circuit: &mut Circuit, roots: &[NodeId]) -> Vec<NodeId> {
        let before = log_enabled!(Level::Debug).then(|| Stats::of(circuit, roots));
        let mut roots = roots.to_vec();

        if self.expand {
            let mut pass = Expander::new();
            roots = roots.iter().map(|&r| pass.expand(circuit, r)).collect();
        }
        if self.simplify {
            let mut pass = Simplifier::new();
            roots = roots.iter().map(|&r| pass.simplify(circuit, r)).collect();
        }
        if self.reduce_depth {
            let mut pass = DepthReducer::new();
            roots = roots.iter().map(|&r| pass.reduce(circuit, r)).collect();
        }
        if self.dedup {
            roots = dedup_many(circuit, &roots);
        }

        if let Some(before) = before {
            debug!("pipeline {self:?}: {before} -> {}", Stats::of(circuit, &roots));
        }
        roots
    }
}

/// Size and depth of a set of outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Maximum multiplicative depth over all outputs.
    pub depth: usize,
    /// Distinct ADD and MUL gates reachable from any output.
    pub gates: usize,
    /// Distinct MUL gates reachable from any output.
    pub multiplications: usize,
}

impl Stats {
    pub fn of(circuit: &Circuit, roots: &[NodeId]) -> Self {
        Stats {
            depth: max_depth(circuit, roots),
            gates: gate_count_many(circuit, roots, GateKinds::ARITHMETIC),
            multiplications: gate_count_many(circuit, roots, GateKinds::MUL),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth {}, {} gates ({} mul)",
            self.depth, self.gates, self.multiplications
        )
    }
}
