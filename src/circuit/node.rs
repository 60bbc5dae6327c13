use bitflags::bitflags;

/// Index of a node in a [`crate::circuit::Circuit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

/// A single node of a circuit.
///
/// Terminals are [`Node::Constant`] and [`Node::Input`]; every other variant is a gate.
/// Shift gates carry their amount as a literal rather than as a child node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Constant(u64),
    Input(String),
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    ShiftLeft(NodeId, usize),
    ShiftRight(NodeId, usize),
}

/// The operation computed by a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Mul,
    ShiftLeft,
    ShiftRight,
}

bitflags! {
    /// A set of gate operations, used to select which gates [`crate::analysis::gate_count`]
    /// counts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GateKinds: u8 {
        const ADD = 1;
        const MUL = 1 << 1;
        const SHIFT_LEFT = 1 << 2;
        const SHIFT_RIGHT = 1 << 3;

        const ARITHMETIC = Self::ADD.bits() | Self::MUL.bits();
        const SHIFTS = Self::SHIFT_LEFT.bits() | Self::SHIFT_RIGHT.bits();
    }
}

impl Op {
    pub fn kind(self) -> GateKinds {
        match self {
            Op::Add => GateKinds::ADD,
            Op::Mul => GateKinds::MUL,
            Op::ShiftLeft => GateKinds::SHIFT_LEFT,
            Op::ShiftRight => GateKinds::SHIFT_RIGHT,
        }
    }
}

impl Node {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Constant(_) | Node::Input(_))
    }

    /// The gate operation of this node, or `None` for terminals.
    pub fn op(&self) -> Option<Op> {
        match self {
            Node::Constant(_) | Node::Input(_) => None,
            Node::Add(..) => Some(Op::Add),
            Node::Mul(..) => Some(Op::Mul),
            Node::ShiftLeft(..) => Some(Op::ShiftLeft),
            Node::ShiftRight(..) => Some(Op::ShiftRight),
        }
    }

    pub fn is_constant(&self, value: u64) -> bool {
        matches!(self, Node::Constant(v) if *v == value)
    }

    pub fn as_add(&self) -> Option<(NodeId, NodeId)> {
        match *self {
            Node::Add(l, r) => Some((l, r)),
            _ => None,
        }
    }

    pub fn as_mul(&self) -> Option<(NodeId, NodeId)> {
        match *self {
            Node::Mul(l, r) => Some((l, r)),
            _ => None,
        }
    }

    /// Child nodes in left-to-right order. Shift amounts are not children.
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        let (a, b) = match *self {
            Node::Constant(_) | Node::Input(_) => (None, None),
            Node::Add(l, r) | Node::Mul(l, r) => (Some(l), Some(r)),
            Node::ShiftLeft(x, _) | Node::ShiftRight(x, _) => (Some(x), None),
        };
        a.into_iter().chain(b)
    }

    /// Replace every child `c` with `f(c)`, keeping the operation and shift amount.
    pub fn map_children(&self, mut f: impl FnMut(NodeId) -> NodeId) -> Node {
        match *self {
            Node::Constant(v) => Node::Constant(v),
            Node::Input(ref name) => Node::Input(name.clone()),
            Node::Add(l, r) => Node::Add(f(l), f(r)),
            Node::Mul(l, r) => Node::Mul(f(l), f(r)),
            Node::ShiftLeft(x, k) => Node::ShiftLeft(f(x), k),
            Node::ShiftRight(x, k) => Node::ShiftRight(f(x), k),
        }
    }

    /// Order the children of commutative gates, so that two nodes whose children are already
    /// canonical compare equal exactly when they are structurally equal.
    pub(crate) fn commutative_key(&self) -> Node {
        match *self {
            Node::Add(l, r) => Node::Add(l.min(r), l.max(r)),
            Node::Mul(l, r) => Node::Mul(l.min(r), l.max(r)),
            _ => self.clone(),
        }
    }
}
