// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Implicit-booleaness lint core.
//!
//! This crate contains the decision procedures for two related lint rules
//! over Python-style syntax trees:
//! - `len-as-condition`: a length computation used as a bare truth test
//! - `negated-len`: a negated length computation, anywhere
//!
//! The crate is designed as a library for a host traversal engine; the
//! host owns parsing, type inference, and diagnostic rendering, and talks
//! to the rules through the [`syntax`], [`inference`], and [`diagnostics`]
//! contracts.

#![doc = include_str!("../../../README.md")]

pub mod diagnostics;
pub mod inference;
pub mod lint;
pub mod syntax;

#[cfg(test)]
mod test_support;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::diagnostics::{Diagnostic, DiagnosticSink, Rule};
    pub use crate::inference::{ClassDescriptor, Inferred, TypeInference};
    pub use crate::lint::{check_call, check_node, check_unary_not, run_lint_passes};
    pub use crate::syntax::{BoolOperator, ComprehensionKind, NodeId, NodeKind, Span, SyntaxTree};
}
