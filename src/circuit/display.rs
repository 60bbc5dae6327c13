use super::{Circuit, Node, NodeId};
use std::fmt;

/// Fully parenthesised infix rendering of the circuit rooted at a node.
///
/// Shared subcircuits are printed once per use, so the output can be much larger than the
/// circuit itself. It is meant for reading, not for parsing.
pub struct Pretty<'a> {
    circuit: &'a Circuit,
    root: NodeId,
}

enum Token {
    Node(NodeId),
    Text(&'static str),
    Shift(&'static str, usize),
}

impl Circuit {
    pub fn display(&self, root: NodeId) -> Pretty<'_> {
        Pretty {
            circuit: self,
            root,
        }
    }
}

fn push_binary(stack: &mut Vec<Token>, l: NodeId, op: &'static str, r: NodeId) {
    stack.push(Token::Text(" )"));
    stack.push(Token::Node(r));
    stack.push(Token::Text(op));
    stack.push(Token::Node(l));
    stack.push(Token::Text("( "));
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // tokens are popped, so they are pushed in reverse
        let mut stack = vec![Token::Node(self.root)];
        while let Some(token) = stack.pop() {
            match token {
                Token::Text(s) => f.write_str(s)?,
                Token::Shift(op, k) => write!(f, " {op} {k} )")?,
                Token::Node(id) => match *self.circuit.node(id) {
                    Node::Constant(v) => write!(f, "{v}")?,
                    Node::Input(ref name) => f.write_str(name)?,
                    Node::Add(l, r) => push_binary(&mut stack, l, " + ", r),
                    Node::Mul(l, r) => push_binary(&mut stack, l, " * ", r),
                    Node::ShiftLeft(x, k) => {
                        stack.push(Token::Shift("<<", k));
                        stack.push(Token::Node(x));
                        stack.push(Token::Text("( "));
                    }
                    Node::ShiftRight(x, k) => {
                        stack.push(Token::Shift(">>", k));
                        stack.push(Token::Node(x));
                        stack.push(Token::Text("( "));
                    }
                },
            }
        }
        Ok(())
    }
}
