// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Syntax-tree surface consumed by the lint rules.
//!
//! This module is the boundary to the host's parser: the host lowers
//! whatever representation it parses into a [`SyntaxTree`] and hands node
//! ids to the rule entry points. The tree is immutable for the duration of
//! an analysis pass and the rules hold only [`NodeId`] handles into it.
//!
//! The modeled [`NodeKind`]s are exactly the shapes the rules distinguish:
//! calls, logical negation, short-circuit boolean chains, the four
//! condition-bearing constructs (`if`, `while`, `assert`, conditional
//! expression), comprehension forms, and the non-test contexts
//! (assignments, expression statements) a call can otherwise land in.

mod span;
mod tree;

pub use span::Span;
pub use tree::{BoolOperator, ComprehensionKind, NodeId, NodeKind, SyntaxTree};
