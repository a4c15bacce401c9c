// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lint rules over host-provided syntax trees.
//!
//! The host traversal engine visits nodes in whatever order it likes and
//! calls [`check_node`] (or the per-kind entry points) for each one. Rules
//! are routed by node kind: call expressions go through the
//! implicit-booleaness rule, logical negations through the negated-length
//! rule. Each visitation event produces at most one diagnostic per rule,
//! and node classifications are independent of each other, so a parallel
//! visitor with a concurrent sink gets the same diagnostic set as the
//! batch entry point [`run_lint_passes`].
//!
//! # Adding a New Rule
//!
//! 1. Create `src/lint/<your_rule>.rs` with a `check_*` entry point.
//! 2. Declare `mod your_rule;` below (keep alphabetical).
//! 3. Route the relevant [`NodeKind`] arm(s) in [`check_node`].

mod implicit_booleaness;
mod negated_len;
// ── add new rule modules here (alphabetical) ──────────────────────────────


use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::inference::TypeInference;
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

pub use implicit_booleaness::check_call;
pub use negated_len::check_unary_not;

/// The builtin whose calls count as length computations.
pub(crate) const LEN_BUILTIN: &str = "len";

/// Routes one node to every rule interested in its kind.
pub fn check_node(
    tree: &SyntaxTree,
    node: NodeId,
    types: &dyn TypeInference,
    sink: &mut dyn DiagnosticSink,
) {
    match tree.kind(node) {
        NodeKind::Call { .. } => check_call(tree, node, types, sink),
        NodeKind::UnaryNot { .. } => check_unary_not(tree, node, sink),
        _ => {}
    }
}

/// Runs every rule over every node of the tree and returns the findings.
///
/// A call wrapped in a negation is diagnosed at the negation node by the
/// negated-length rule; the call node itself can additionally be diagnosed
/// only when it independently sits in a condition, so the two rules never
/// double-report one underlying expression.
#[must_use]
pub fn run_lint_passes(tree: &SyntaxTree, types: &dyn TypeInference) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for node in tree.ids() {
        check_node(tree, node, types, &mut diagnostics);
    }
    diagnostics
}
