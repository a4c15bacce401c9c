// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics and the sink the rules append them to.
//!
//! Rules are write-only producers: they build a [`Diagnostic`] and hand it
//! to a [`DiagnosticSink`], never reading anything back. The host decides
//! what a sink is: a plain `Vec` for batch linting, something channel-like
//! for a parallel visitor. Emission order carries no meaning.

use ecow::EcoString;

use crate::syntax::Span;

/// Identifier of a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `len(...)` used as a bare condition.
    LenAsCondition,
    /// `not len(...)`, anywhere.
    NegatedLen,
}

impl Rule {
    /// Stable rule name, suitable for suppression comments and docs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LenAsCondition => "len-as-condition",
            Self::NegatedLen => "negated-len",
        }
    }

    /// Longer guidance text for the rule.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::LenAsCondition => {
                "For sequences (strings, lists, tuples), PEP 8 recommends using the \
                 fact that empty sequences are false. Instead of coercing a length \
                 to a boolean inside a condition, rely on the sequence's own \
                 truthiness or compare the length against a scalar."
            }
            Self::NegatedLen => {
                "Negating a length hides the emptiness test: `not len(seq)` should \
                 always be written `not seq`, whether or not the result feeds a \
                 condition."
            }
        }
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The rule that fired.
    pub rule: Rule,
    /// The message describing the finding.
    pub message: EcoString,
    /// The source location of the offending node.
    pub span: Span,
    /// Optional hint for how to fix the issue.
    pub hint: Option<EcoString>,
}

impl Diagnostic {
    /// Creates a new diagnostic without a hint.
    #[must_use]
    pub fn new(rule: Rule, message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            rule,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Attaches a fix hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<EcoString>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Append-only receiver for diagnostics.
///
/// `emit` is fire-and-forget; implementations must accept diagnostics in
/// any order and must not fail.
pub trait DiagnosticSink {
    /// Records one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_construction() {
        let diag = Diagnostic::new(Rule::LenAsCondition, "message", Span::new(3, 13));
        assert_eq!(diag.rule, Rule::LenAsCondition);
        assert_eq!(diag.message, "message");
        assert_eq!(diag.span, Span::new(3, 13));
        assert!(diag.hint.is_none());
    }

    #[test]
    fn with_hint_attaches_hint() {
        let diag =
            Diagnostic::new(Rule::NegatedLen, "message", Span::new(0, 4)).with_hint("fix it");
        assert_eq!(diag.hint.as_deref(), Some("fix it"));
    }

    #[test]
    fn rule_names_are_stable() {
        assert_eq!(Rule::LenAsCondition.name(), "len-as-condition");
        assert_eq!(Rule::NegatedLen.name(), "negated-len");
    }

    #[test]
    fn rule_descriptions_mention_the_idiom() {
        assert!(Rule::LenAsCondition.description().contains("PEP 8"));
        assert!(Rule::NegatedLen.description().contains("not seq"));
    }

    #[test]
    fn vec_sink_appends_in_emission_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.emit(Diagnostic::new(Rule::LenAsCondition, "first", Span::new(0, 1)));
        sink.emit(Diagnostic::new(Rule::NegatedLen, "second", Span::new(1, 2)));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].message, "first");
        assert_eq!(sink[1].message, "second");
    }
}
