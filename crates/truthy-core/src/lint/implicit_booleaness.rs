// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lint: flag `len(...)` calls used as bare truth tests.
//!
//! PEP 8: for sequences (strings, lists, tuples), use the fact that empty
//! sequences are false.
//!
//! ```text
//! # Bad: length coerced to a boolean
//! if len(seq): ...
//! while other or len(seq): ...
//!
//! # Good: the sequence is its own emptiness test
//! if seq: ...
//! while other or seq: ...
//! ```
//!
//! Two questions decide whether a call is flagged. First, does it sit in
//! *truthiness position*: the nearest non-`and`/`or` ancestor is a
//! condition-bearing construct and the call (after flattening out of the
//! boolean chain) occupies exactly its test slot. Second, is the argument
//! of a type whose truthiness already reflects emptiness, so the coercion
//! is provably redundant. Both must hold; a length stored in a variable or
//! passed along as a value is legitimate, and a type that redefines its
//! boolean conversion is not safely interchangeable.

use std::collections::HashSet;

use crate::diagnostics::{Diagnostic, DiagnosticSink, Rule};
use crate::inference::{ClassDescriptor, Inferred, TypeInference};
use crate::lint::LEN_BUILTIN;
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

/// Marker type whose truthiness is exactly non-emptiness by construction;
/// no boolean-conversion override changes that.
const RANGE_LIKE: &str = "range";

/// Built-in sequence kinds whose empty-is-false convention PEP 8 relies on.
const PEP8_SEQUENCE_BASES: &[&str] = &["str", "tuple", "list", "set"];

/// Capability a class declares to redefine its boolean conversion.
const BOOL_OVERRIDE: &str = "__bool__";

/// Checks one call expression; emits at most one diagnostic at the call.
pub fn check_call(
    tree: &SyntaxTree,
    call: NodeId,
    types: &dyn TypeInference,
    sink: &mut dyn DiagnosticSink,
) {
    if !tree.is_call_of(call, LEN_BUILTIN) {
        return;
    }
    if !in_truthiness_position(tree, call) {
        return;
    }
    let NodeKind::Call { args, .. } = tree.kind(call) else {
        return;
    };
    // The host validates the argument list before dispatch; a bare `len()`
    // degrades to silence rather than a fault.
    let Some(&argument) = args.first() else {
        return;
    };
    if classify_argument(tree, argument, types).is_redundant() {
        let subject = display_argument(tree, argument).unwrap_or_else(|| "...".to_string());
        sink.emit(
            Diagnostic::new(
                Rule::LenAsCondition,
                format!(
                    "do not use `len({subject})` without comparison to determine \
                     if a sequence is empty"
                ),
                tree.span(call),
            )
            .with_hint(format!(
                "rely on the sequence's truthiness instead: `if {subject}:` or \
                 `if not {subject}:`"
            )),
        );
    }
}

/// Returns true if `node`, after flattening out of any enclosing
/// short-circuit boolean chain, occupies the test slot of a
/// condition-bearing ancestor.
///
/// `if len(x):` and `if a or (b and len(x)):` both hold; the call reached
/// directly and the call reached through several `BoolOp` levels go through
/// the same flatten-then-classify decision.
fn in_truthiness_position(tree: &SyntaxTree, node: NodeId) -> bool {
    let mut flattened = node;
    let mut visited = HashSet::from([node]);
    let mut site = tree.parent(node);
    while let Some(ancestor) = site {
        if !matches!(tree.kind(ancestor), NodeKind::BoolOp { .. }) {
            break;
        }
        // The tree contract guarantees acyclic parent links; if a host
        // violates it anyway, abstain instead of spinning.
        if !visited.insert(ancestor) {
            return false;
        }
        flattened = ancestor;
        site = tree.parent(ancestor);
    }
    let Some(site) = site else {
        return false;
    };
    match tree.kind(site) {
        NodeKind::If { test, .. }
        | NodeKind::While { test, .. }
        | NodeKind::Assert { test, .. }
        | NodeKind::IfExp { test, .. } => *test == flattened,
        _ => false,
    }
}

/// How a `len(...)` argument relates to the emptiness-truthiness
/// convention. Evaluated in the fixed order of [`classify_argument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LenArgument {
    /// A comprehension or generator expression; directly testable without
    /// materializing a length, whatever its element type.
    Comprehension,
    /// Ancestry includes the range marker.
    RangeLike,
    /// Ancestry includes one of the PEP 8 sequence bases.
    EmptinessSequence { redefines_bool: bool },
    /// No recognized base; the idiom is not ours to judge.
    Unrelated,
    /// Inference gave no answer.
    Unresolved,
}

impl LenArgument {
    /// Returns true if coercing this argument's length to a boolean is
    /// provably redundant.
    fn is_redundant(self) -> bool {
        match self {
            Self::Comprehension | Self::RangeLike => true,
            Self::EmptinessSequence { redefines_bool } => !redefines_bool,
            Self::Unrelated | Self::Unresolved => false,
        }
    }
}

fn classify_argument(
    tree: &SyntaxTree,
    argument: NodeId,
    types: &dyn TypeInference,
) -> LenArgument {
    if tree.kind(argument).is_comprehension() {
        return LenArgument::Comprehension;
    }
    let class = match types.infer(tree, argument) {
        Inferred::Resolved(class) => class,
        Inferred::Indeterminate => return LenArgument::Unresolved,
    };
    let descriptor = ClassDescriptor::resolve(types, class);
    // Range-like types are checked before the override lookup: their
    // truthiness is non-emptiness by construction, so a declared
    // `__bool__` does not suppress the finding.
    if descriptor.includes(RANGE_LIKE) {
        return LenArgument::RangeLike;
    }
    if PEP8_SEQUENCE_BASES
        .iter()
        .any(|base| descriptor.includes(base))
    {
        return LenArgument::EmptinessSequence {
            redefines_bool: types.has_capability(&descriptor.name, BOOL_OVERRIDE),
        };
    }
    LenArgument::Unrelated
}

/// Returns a concise rendering of the argument for diagnostic messages,
/// or `None` if the expression is too complex to show inline.
fn display_argument(tree: &SyntaxTree, node: NodeId) -> Option<String> {
    match tree.kind(node) {
        NodeKind::Name { id } => Some(id.to_string()),
        _ => None,
    }
}
