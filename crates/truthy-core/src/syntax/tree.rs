// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Arena-backed syntax tree.
//!
//! The host parser owns the real program representation; what the lint
//! rules need from it is a flat, immutable view with parent links, because
//! the boolean-context classifier walks *outward* from a call through its
//! enclosing `and`/`or` operators. [`SyntaxTree`] stores nodes in insertion
//! order and hands out copyable [`NodeId`] handles; inserting a node wires
//! the parent link of each of its children.
//!
//! Only the node kinds this analysis distinguishes are modeled. Everything
//! else in a real program (arithmetic, subscripts, attribute access, ...)
//! is uninteresting here: a call that does not ascend into a designated
//! test slot is simply not in truthiness position, whatever its actual
//! surroundings were.

use ecow::EcoString;

use crate::syntax::Span;

/// Handle to a node in a [`SyntaxTree`].
///
/// Ids are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A short-circuit boolean operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOperator {
    And,
    Or,
}

/// The four comprehension-like expression forms.
///
/// All of them are directly truthiness-testable without materializing a
/// length, so the rules treat them uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComprehensionKind {
    List,
    Set,
    Dict,
    Generator,
}

/// The shape of a syntax node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An identifier reference.
    Name { id: EcoString },

    /// An integer literal.
    Int(i64),

    /// A string literal.
    Str(EcoString),

    /// A call expression. The callee is an ordinary child expression;
    /// a "length computation" is a call whose callee is the name `len`.
    Call { func: NodeId, args: Vec<NodeId> },

    /// Logical negation (`not x`).
    UnaryNot { operand: NodeId },

    /// A variable-arity short-circuit chain (`a and b and c`, `a or b`).
    BoolOp { op: BoolOperator, values: Vec<NodeId> },

    /// A comprehension or generator expression.
    Comprehension {
        kind: ComprehensionKind,
        element: NodeId,
        source: NodeId,
    },

    /// An `if` statement; `elif` chains arrive as nested `If` in `orelse`.
    If {
        test: NodeId,
        body: Vec<NodeId>,
        orelse: Vec<NodeId>,
    },

    /// A `while` loop.
    While { test: NodeId, body: Vec<NodeId> },

    /// An `assert` statement with an optional failure message.
    Assert { test: NodeId, message: Option<NodeId> },

    /// A conditional expression (`a if test else b`).
    IfExp {
        test: NodeId,
        body: NodeId,
        orelse: NodeId,
    },

    /// An assignment statement.
    Assign { target: NodeId, value: NodeId },

    /// An expression evaluated for effect in statement position.
    ExprStmt { value: NodeId },
}

impl NodeKind {
    /// Returns the node's children in syntactic order.
    #[must_use]
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Self::Name { .. } | Self::Int(_) | Self::Str(_) => Vec::new(),
            Self::Call { func, args } => {
                let mut children = vec![*func];
                children.extend(args);
                children
            }
            Self::UnaryNot { operand } => vec![*operand],
            Self::BoolOp { values, .. } => values.clone(),
            Self::Comprehension {
                element, source, ..
            } => vec![*element, *source],
            Self::If { test, body, orelse } => {
                let mut children = vec![*test];
                children.extend(body);
                children.extend(orelse);
                children
            }
            Self::While { test, body } => {
                let mut children = vec![*test];
                children.extend(body);
                children
            }
            Self::Assert { test, message } => {
                let mut children = vec![*test];
                children.extend(message);
                children
            }
            Self::IfExp { test, body, orelse } => vec![*test, *body, *orelse],
            Self::Assign { target, value } => vec![*target, *value],
            Self::ExprStmt { value } => vec![*value],
        }
    }

    /// Returns true for comprehension and generator expressions.
    #[must_use]
    pub const fn is_comprehension(&self) -> bool {
        matches!(self, Self::Comprehension { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct NodeData {
    kind: NodeKind,
    span: Span,
    parent: Option<NodeId>,
}

/// An immutable-after-construction syntax tree.
///
/// Children are inserted before their parent; [`SyntaxTree::insert`] links
/// each child back to the node being inserted. The tree never changes
/// during analysis, so rules may visit nodes in any order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Inserts a node and wires the parent link of each of its children.
    ///
    /// Children must already be in the tree and must not have a parent yet;
    /// a tree is built bottom-up, each node claimed by exactly one parent.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "trees with over u32::MAX nodes are not supported"
    )]
    pub fn insert(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        for child in kind.children() {
            let slot = &mut self.nodes[child.index()].parent;
            debug_assert!(slot.is_none(), "node {child:?} already has a parent");
            *slot = Some(id);
        }
        self.nodes.push(NodeData {
            kind,
            span,
            parent: None,
        });
        id
    }

    /// Returns the kind of a node.
    #[must_use]
    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.index()].kind
    }

    /// Returns the span of a node.
    #[must_use]
    pub fn span(&self, node: NodeId) -> Span {
        self.nodes[node.index()].span
    }

    /// Returns a node's parent, or `None` for a root.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node id. The order carries no meaning; each
    /// node's classification is independent of visitation order.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "node count fits u32 by construction"
    )]
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|index| NodeId(index as u32))
    }

    /// Returns true if `node` is a call whose callee is the name `name`.
    #[must_use]
    pub fn is_call_of(&self, node: NodeId, name: &str) -> bool {
        let NodeKind::Call { func, .. } = self.kind(node) else {
            return false;
        };
        matches!(self.kind(*func), NodeKind::Name { id } if id == name)
    }

    /// Overrides a parent link. Exists so tests can violate the acyclicity
    /// contract and exercise the defensive paths.
    #[cfg(test)]
    pub(crate) fn force_parent(&mut self, node: NodeId, parent: Option<NodeId>) {
        self.nodes[node.index()].parent = parent;
    }

    // ── Convenience constructors ──────────────────────────────────────────

    /// Inserts a [`NodeKind::Name`] node.
    pub fn name(&mut self, id: impl Into<EcoString>, span: Span) -> NodeId {
        self.insert(NodeKind::Name { id: id.into() }, span)
    }

    /// Inserts a [`NodeKind::Int`] node.
    pub fn int(&mut self, value: i64, span: Span) -> NodeId {
        self.insert(NodeKind::Int(value), span)
    }

    /// Inserts a [`NodeKind::Str`] node.
    pub fn string(&mut self, value: impl Into<EcoString>, span: Span) -> NodeId {
        self.insert(NodeKind::Str(value.into()), span)
    }

    /// Inserts a [`NodeKind::Call`] node.
    pub fn call(&mut self, func: NodeId, args: Vec<NodeId>, span: Span) -> NodeId {
        self.insert(NodeKind::Call { func, args }, span)
    }

    /// Inserts a [`NodeKind::UnaryNot`] node.
    pub fn unary_not(&mut self, operand: NodeId, span: Span) -> NodeId {
        self.insert(NodeKind::UnaryNot { operand }, span)
    }

    /// Inserts a [`NodeKind::BoolOp`] node.
    pub fn bool_op(&mut self, op: BoolOperator, values: Vec<NodeId>, span: Span) -> NodeId {
        self.insert(NodeKind::BoolOp { op, values }, span)
    }

    /// Inserts a [`NodeKind::Comprehension`] node.
    pub fn comprehension(
        &mut self,
        kind: ComprehensionKind,
        element: NodeId,
        source: NodeId,
        span: Span,
    ) -> NodeId {
        self.insert(
            NodeKind::Comprehension {
                kind,
                element,
                source,
            },
            span,
        )
    }

    /// Inserts a [`NodeKind::If`] node.
    pub fn if_stmt(
        &mut self,
        test: NodeId,
        body: Vec<NodeId>,
        orelse: Vec<NodeId>,
        span: Span,
    ) -> NodeId {
        self.insert(NodeKind::If { test, body, orelse }, span)
    }

    /// Inserts a [`NodeKind::While`] node.
    pub fn while_stmt(&mut self, test: NodeId, body: Vec<NodeId>, span: Span) -> NodeId {
        self.insert(NodeKind::While { test, body }, span)
    }

    /// Inserts a [`NodeKind::Assert`] node.
    pub fn assert_stmt(&mut self, test: NodeId, message: Option<NodeId>, span: Span) -> NodeId {
        self.insert(NodeKind::Assert { test, message }, span)
    }

    /// Inserts a [`NodeKind::IfExp`] node.
    pub fn if_exp(&mut self, test: NodeId, body: NodeId, orelse: NodeId, span: Span) -> NodeId {
        self.insert(NodeKind::IfExp { test, body, orelse }, span)
    }

    /// Inserts a [`NodeKind::Assign`] node.
    pub fn assign(&mut self, target: NodeId, value: NodeId, span: Span) -> NodeId {
        self.insert(NodeKind::Assign { target, value }, span)
    }

    /// Inserts a [`NodeKind::ExprStmt`] node.
    pub fn expr_stmt(&mut self, value: NodeId, span: Span) -> NodeId {
        self.insert(NodeKind::ExprStmt { value }, span)
    }
}
