use crate::circuit::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while evaluating circuits, building gadgets, or loading circuits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("input `{name}` not found in input map")]
    MissingInput { name: String },
    #[error("operand lengths differ: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("operand has length zero")]
    EmptyOperand,
    #[error("length {0} is not a power of two")]
    NotPowerOfTwo(usize),
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("node {node:?} refers to {child:?}, which is not an earlier node")]
    ForwardReference { node: NodeId, child: NodeId },
}
