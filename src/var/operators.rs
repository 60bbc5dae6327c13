use super::var::*;
use crate::circuit::{Circuit, NodeId};

use std::ops::{Add, AddAssign, Mul, MulAssign, Shl, ShlAssign, Shr, ShrAssign};
use std::rc::Rc;

// helper function to create binary ops
fn binop(lhs: &Var, rhs: &Var, op: fn(&mut Circuit, NodeId, NodeId) -> NodeId) -> Var {
    assert!(
        Rc::ptr_eq(&lhs.state, &rhs.state),
        "operands belong to different circuits"
    );
    let id = op(&mut lhs.state.borrow_mut(), lhs.id, rhs.id);
    Var::new(lhs.state.clone(), id)
}

fn shift(lhs: &Var, amount: usize, op: fn(&mut Circuit, NodeId, usize) -> NodeId) -> Var {
    let id = op(&mut lhs.state.borrow_mut(), lhs.id, amount);
    Var::new(lhs.state.clone(), id)
}

// Implement a binary operator for every combination of owned and borrowed operands.
macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:path) => {
        impl $trait<&Var> for &Var {
            type Output = Var;

            fn $method(self, rhs: &Var) -> Var {
                binop(self, rhs, $op)
            }
        }

        impl $trait<Var> for &Var {
            type Output = Var;

            fn $method(self, rhs: Var) -> Var {
                binop(self, &rhs, $op)
            }
        }

        impl $trait<&Var> for Var {
            type Output = Var;

            fn $method(self, rhs: &Var) -> Var {
                binop(&self, rhs, $op)
            }
        }

        impl $trait<Var> for Var {
            type Output = Var;

            fn $method(self, rhs: Var) -> Var {
                binop(&self, &rhs, $op)
            }
        }

        impl $assign_trait<&Var> for Var {
            fn $assign_method(&mut self, rhs: &Var) {
                *self = binop(self, rhs, $op);
            }
        }

        impl $assign_trait<Var> for Var {
            fn $assign_method(&mut self, rhs: Var) {
                *self = binop(self, &rhs, $op);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, Circuit::add);
impl_binop!(Mul, mul, MulAssign, mul_assign, Circuit::mul);

macro_rules! impl_shift {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:path) => {
        impl $trait<usize> for &Var {
            type Output = Var;

            fn $method(self, amount: usize) -> Var {
                shift(self, amount, $op)
            }
        }

        impl $trait<usize> for Var {
            type Output = Var;

            fn $method(self, amount: usize) -> Var {
                shift(&self, amount, $op)
            }
        }

        impl $assign_trait<usize> for Var {
            fn $assign_method(&mut self, amount: usize) {
                *self = shift(self, amount, $op);
            }
        }
    };
}

impl_shift!(Shl, shl, ShlAssign, shl_assign, Circuit::shift_left);
impl_shift!(Shr, shr, ShrAssign, shr_assign, Circuit::shift_right);
