// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lint: flag `not len(...)` wherever it appears.
//!
//! ```text
//! # Bad
//! if not len(seq): ...
//! empty = not len(seq)
//!
//! # Good
//! if not seq: ...
//! empty = not seq
//! ```
//!
//! Unlike the condition rule, this one needs no position analysis and no
//! inference: negating a length is never the right idiom, whether the
//! result feeds a condition or is stored. The check is purely syntactic,
//! which is why the entry point takes no inference provider.

use crate::diagnostics::{Diagnostic, DiagnosticSink, Rule};
use crate::lint::LEN_BUILTIN;
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

/// Checks one logical-not node; emits at most one diagnostic at the
/// negation.
pub fn check_unary_not(tree: &SyntaxTree, node: NodeId, sink: &mut dyn DiagnosticSink) {
    let NodeKind::UnaryNot { operand } = tree.kind(node) else {
        return;
    };
    if tree.is_call_of(*operand, LEN_BUILTIN) {
        sink.emit(
            Diagnostic::new(
                Rule::NegatedLen,
                "`not len(...)` negates a length instead of testing emptiness",
                tree.span(node),
            )
            .with_hint("test the value directly: `not seq`"),
        );
    }
}
