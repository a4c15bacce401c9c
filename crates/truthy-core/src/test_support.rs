// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Shared test doubles for the lint rules.
//!
//! The production core never implements inference; tests stand in for the
//! host engine with [`ClassTable`], a small class registry with single
//! inheritance, declared method names, and name-to-class bindings. It
//! resolves leaf expressions only (names, literals, constructor calls),
//! which is all the rule fixtures need; everything else is indeterminate,
//! exactly like a real engine giving up.

use std::collections::{HashMap, HashSet};

use ecow::EcoString;

use crate::inference::{Inferred, TypeInference};
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

#[derive(Debug, Clone)]
struct ClassEntry {
    base: Option<EcoString>,
    methods: Vec<EcoString>,
}

/// In-memory [`TypeInference`] implementation for tests.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClassTable {
    classes: HashMap<EcoString, ClassEntry>,
    bindings: HashMap<EcoString, EcoString>,
}

impl ClassTable {
    /// Creates a table pre-populated with the built-in classes the rules
    /// care about. Note that `list` and friends do not declare `__bool__`;
    /// their truthiness falls out of `__len__`, which is the whole point
    /// of the lint. `int` does declare it, and is unrelated to the policy
    /// bases regardless.
    pub(crate) fn with_builtins() -> Self {
        let mut table = Self::default();
        table.define_class("object", None, &[]);
        table.define_class("str", Some("object"), &["__len__", "upper", "split"]);
        table.define_class("tuple", Some("object"), &["__len__", "count", "index"]);
        table.define_class("list", Some("object"), &["__len__", "append", "extend"]);
        table.define_class("set", Some("object"), &["__len__", "add", "discard"]);
        table.define_class("dict", Some("object"), &["__len__", "keys", "values"]);
        table.define_class("range", Some("object"), &["__len__", "count", "index"]);
        table.define_class("int", Some("object"), &["__bool__", "bit_length"]);
        table
    }

    /// Registers a class with an optional base and its declared methods.
    pub(crate) fn define_class(&mut self, name: &str, base: Option<&str>, methods: &[&str]) {
        self.classes.insert(
            name.into(),
            ClassEntry {
                base: base.map(EcoString::from),
                methods: methods.iter().map(|method| EcoString::from(*method)).collect(),
            },
        );
    }

    /// Binds a variable name to the class of its value.
    pub(crate) fn bind(&mut self, variable: &str, class: &str) {
        self.bindings.insert(variable.into(), class.into());
    }
}

impl TypeInference for ClassTable {
    fn infer(&self, tree: &SyntaxTree, expr: NodeId) -> Inferred {
        match tree.kind(expr) {
            NodeKind::Name { id } => match self.bindings.get(id) {
                Some(class) => Inferred::Resolved(class.clone()),
                None => Inferred::Indeterminate,
            },
            NodeKind::Str(_) => Inferred::Resolved("str".into()),
            NodeKind::Int(_) => Inferred::Resolved("int".into()),
            // Calling a known class name constructs an instance of it.
            NodeKind::Call { func, .. } => match tree.kind(*func) {
                NodeKind::Name { id } if self.classes.contains_key(id) => {
                    Inferred::Resolved(id.clone())
                }
                _ => Inferred::Indeterminate,
            },
            _ => Inferred::Indeterminate,
        }
    }

    fn ancestors_of(&self, class: &str) -> Vec<EcoString> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(EcoString::from(class));
        let mut current = EcoString::from(class);
        loop {
            let Some(entry) = self.classes.get(&current) else {
                break;
            };
            let Some(base) = entry.base.clone() else {
                break;
            };
            if !visited.insert(base.clone()) {
                break; // Cycle in the registry; keep the chain finite.
            }
            chain.push(base.clone());
            current = base;
        }
        chain
    }

    fn has_capability(&self, class: &str, capability: &str) -> bool {
        let mut current = EcoString::from(class);
        let mut visited = HashSet::new();
        while visited.insert(current.clone()) {
            let Some(entry) = self.classes.get(&current) else {
                return false;
            };
            if entry.methods.iter().any(|method| method == capability) {
                return true;
            }
            match entry.base.clone() {
                Some(base) => current = base,
                None => return false,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    #[test]
    fn ancestors_walk_the_base_chain() {
        let mut table = ClassTable::with_builtins();
        table.define_class("Stack", Some("list"), &["push"]);
        assert_eq!(
            table.ancestors_of("Stack"),
            vec![EcoString::from("list"), EcoString::from("object")]
        );
        assert!(table.ancestors_of("object").is_empty());
        assert!(table.ancestors_of("NoSuchClass").is_empty());
    }

    #[test]
    fn ancestors_tolerate_cycles() {
        let mut table = ClassTable::default();
        table.define_class("A", Some("B"), &[]);
        table.define_class("B", Some("A"), &[]);
        assert_eq!(
            table.ancestors_of("A"),
            vec![EcoString::from("B")]
        );
    }

    #[test]
    fn capabilities_are_inherited() {
        let mut table = ClassTable::with_builtins();
        table.define_class("Buffer", Some("list"), &["__bool__"]);
        table.define_class("RingBuffer", Some("Buffer"), &[]);
        assert!(table.has_capability("Buffer", "__bool__"));
        assert!(table.has_capability("RingBuffer", "__bool__"));
        assert!(!table.has_capability("list", "__bool__"));
        assert!(!table.has_capability("NoSuchClass", "__bool__"));
    }

    #[test]
    fn constructor_calls_infer_to_their_class() {
        let mut tree = SyntaxTree::new();
        let func = tree.name("range", Span::new(0, 5));
        let call = tree.call(func, vec![], Span::new(0, 7));

        let table = ClassTable::with_builtins();
        assert_eq!(
            table.infer(&tree, call),
            Inferred::Resolved("range".into())
        );

        let mut tree = SyntaxTree::new();
        let func = tree.name("mystery", Span::new(0, 7));
        let call = tree.call(func, vec![], Span::new(0, 9));
        assert_eq!(table.infer(&tree, call), Inferred::Indeterminate);
    }
}
