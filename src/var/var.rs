use crate::circuit::{Circuit, Node, NodeId};

use std::cell::RefCell;
use std::rc::Rc;

/// Shared, mutable circuit state that [`Var`]s append gates to.
pub type Builder = Rc<RefCell<Circuit>>;

/// A node of a circuit under construction, together with the circuit it belongs to.
#[derive(Clone, Debug)]
pub struct Var {
    pub state: Builder,
    pub id: NodeId,
}

impl Var {
    pub fn new(state: Builder, id: NodeId) -> Self {
        Var { state, id }
    }

    pub fn constant(state: &Builder, value: u64) -> Self {
        let id = state.borrow_mut().constant(value);
        Var::new(state.clone(), id)
    }

    pub fn input(state: &Builder, name: impl Into<String>) -> Self {
        let id = state.borrow_mut().input(name);
        Var::new(state.clone(), id)
    }

    /// See [`Circuit::vector_input`].
    pub fn vector_input(state: &Builder, name: &str, dim: usize) -> Vec<Var> {
        let ids = state.borrow_mut().vector_input(name, dim);
        ids.into_iter().map(|id| Var::new(state.clone(), id)).collect()
    }

    /// See [`Circuit::array_input`].
    pub fn array_input(state: &Builder, name: &str, n: usize, nbits: usize) -> Vec<Vec<Var>> {
        let ids = state.borrow_mut().array_input(name, n, nbits);
        ids.into_iter()
            .map(|row| row.into_iter().map(|id| Var::new(state.clone(), id)).collect())
            .collect()
    }

    /// A new constant in the same circuit as `self`.
    pub fn lift(&self, value: u64) -> Var {
        Var::constant(&self.state, value)
    }

    pub fn zero(&self) -> Var {
        self.lift(0)
    }

    pub fn one(&self) -> Var {
        self.lift(1)
    }

    /// A copy of this var's node.
    pub fn node(&self) -> Node {
        self.state.borrow().node(self.id).clone()
    }
}
