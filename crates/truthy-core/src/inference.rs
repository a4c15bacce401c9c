// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The type-inference collaborator contract.
//!
//! The rules never perform inference themselves; the host supplies an
//! engine behind [`TypeInference`]. Inference over a dynamic language is
//! allowed to give up, so resolution is a sum type, [`Inferred`], and
//! every consumer branches on both arms. An indeterminate answer always
//! means "stay silent", never "fail".
//!
//! Capability lookup ([`TypeInference::has_capability`]) answers whether a
//! class provides a named method. Absence is the common case and is a
//! definite negative, not an error.

use ecow::EcoString;

use crate::syntax::{NodeId, SyntaxTree};

/// Result of resolving an expression to the class of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inferred {
    /// The expression's value is an instance of the named class.
    Resolved(EcoString),
    /// The engine could not decide. Not an error.
    Indeterminate,
}

/// Host-supplied type-inference engine.
pub trait TypeInference {
    /// Resolves an expression node to the class of its value.
    fn infer(&self, tree: &SyntaxTree, expr: NodeId) -> Inferred;

    /// Returns a class's ancestors in resolution order, transitively,
    /// including the universal base type. Empty when the class is unknown
    /// or ancestry is meaningless for it.
    fn ancestors_of(&self, class: &str) -> Vec<EcoString>;

    /// Returns true if `class` provides the named capability (method).
    fn has_capability(&self, class: &str, capability: &str) -> bool;
}

/// A resolved class together with its materialized ancestor chain.
///
/// The chain is collected once per resolution so policy checks are plain
/// list membership rather than repeated walks of a live hierarchy. A value
/// without a meaningful ancestry collapses to just its own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// The class's own name.
    pub name: EcoString,
    /// Ancestor class names, nearest first.
    pub ancestry: Vec<EcoString>,
}

impl ClassDescriptor {
    /// Materializes the descriptor for `name` by asking the engine for its
    /// ancestor chain.
    #[must_use]
    pub fn resolve(types: &dyn TypeInference, name: EcoString) -> Self {
        let ancestry = types.ancestors_of(&name);
        Self { name, ancestry }
    }

    /// Returns true if `class` is the descriptor's own name or appears in
    /// its ancestry.
    #[must_use]
    pub fn includes(&self, class: &str) -> bool {
        self.name == class || self.ancestry.iter().any(|ancestor| ancestor == class)
    }
}
