//! Expression trees.
//!
//! An [`Expr`] is one of four shapes: an integer constant, a named variable,
//! a unary operation or a binary operation. Nodes are reference counted, so
//! cloning a tree is cheap and subtrees may be shared freely.

use std::fmt;
use std::sync::Arc;

/// The node shapes. Private: callers go through [`Expr::visit`] and
/// [`Expr::fold`].
#[derive(PartialEq, Eq, Hash)]
enum Node {
    Constant(i32),
    Variable(String),
    Unary { op: String, arg: Expr },
    Binary { op: String, left: Expr, right: Expr },
}

/// An immutable arithmetic expression.
///
/// Operator names are opaque: `"+"` means nothing to the tree itself and is
/// only given semantics when the tree is folded against an evaluation mode.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Expr(Arc<Node>);

impl Expr {
    /// Creates a constant expression.
    #[must_use]
    pub fn constant(value: i32) -> Self {
        Self(Arc::new(Node::Constant(value)))
    }

    /// Creates a variable reference.
    ///
    /// Any name is accepted here; whether it can be evaluated is decided when
    /// the expression is folded into an evaluator.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self(Arc::new(Node::Variable(name.into())))
    }

    /// Creates a unary operation.
    #[must_use]
    pub fn unary(op: impl Into<String>, arg: Expr) -> Self {
        Self(Arc::new(Node::Unary { op: op.into(), arg }))
    }

    /// Creates a binary operation.
    #[must_use]
    pub fn binary(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Self(Arc::new(Node::Binary {
            op: op.into(),
            left,
            right,
        }))
    }

    /// Dispatches on the shape of this node without recursing.
    ///
    /// Exactly one callback is invoked. Children of unary and binary nodes are
    /// handed over unevaluated.
    pub fn visit<'a, R>(
        &'a self,
        constant: impl FnOnce(i32) -> R,
        variable: impl FnOnce(&'a str) -> R,
        unary: impl FnOnce(&'a str, &'a Expr) -> R,
        binary: impl FnOnce(&'a str, &'a Expr, &'a Expr) -> R,
    ) -> R {
        match &*self.0 {
            Node::Constant(value) => constant(*value),
            Node::Variable(name) => variable(name),
            Node::Unary { op, arg } => unary(op, arg),
            Node::Binary { op, left, right } => binary(op, left, right),
        }
    }

    /// Folds the whole tree bottom-up.
    ///
    /// Children are folded before their parent, the left child of a binary
    /// node before the right one. Unary and binary callbacks receive the
    /// folded results of their children.
    pub fn fold<R, C, V, U, B>(&self, mut constant: C, mut variable: V, mut unary: U, mut binary: B) -> R
    where
        C: FnMut(i32) -> R,
        V: FnMut(&str) -> R,
        U: FnMut(&str, R) -> R,
        B: FnMut(&str, R, R) -> R,
    {
        self.fold_with(&mut constant, &mut variable, &mut unary, &mut binary)
    }

    fn fold_with<R, C, V, U, B>(&self, constant: &mut C, variable: &mut V, unary: &mut U, binary: &mut B) -> R
    where
        C: FnMut(i32) -> R,
        V: FnMut(&str) -> R,
        U: FnMut(&str, R) -> R,
        B: FnMut(&str, R, R) -> R,
    {
        match &*self.0 {
            Node::Constant(value) => constant(*value),
            Node::Variable(name) => variable(name),
            Node::Unary { op, arg } => {
                let arg = arg.fold_with(constant, variable, unary, binary);
                unary(op, arg)
            }
            Node::Binary { op, left, right } => {
                let left = left.fold_with(constant, variable, unary, binary);
                let right = right.fold_with(constant, variable, unary, binary);
                binary(op, left, right)
            }
        }
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn size(&self) -> usize {
        self.fold(|_| 1, |_| 1, |_, arg| arg + 1, |_, left, right| left + right + 1)
    }

    /// Returns the height of the tree; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.fold(
            |_| 1,
            |_| 1,
            |_, arg| arg + 1,
            |_, left, right| left.max(right) + 1,
        )
    }

    /// Returns true if this node is a constant or a variable.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(&*self.0, Node::Constant(_) | Node::Variable(_))
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({self})")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}
