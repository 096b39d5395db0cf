//! Builtin bindings and the registry that owns them.
//!
//! A `Binding` is one named entry of a builtin namespace. There are three
//! kinds, and the kind decides what a call does:
//!
//! | Kind | Call result | Example |
//! |------|-------------|---------|
//! | `Stub` | The declared fixed result, at every call site | `parseInt` → number |
//! | `Specialized` | Computed per call site by a semantics function | `Array.prototype.forEach` |
//! | `Property` | Not callable; a data member of the namespace | `Math.PI` |
//!
//! Bindings are immutable once registered. The registry hands out
//! `BuiltinRef`s that the value store records on builtin function objects, so
//! a call that reaches a builtin function can find its binding again.

use crate::dispatch::{CallContext, CallSite};
use jsa_values::{BuiltinRef, ValueSet};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Per-call-site semantics of a specialized builtin.
///
/// Implementations must tolerate any number of arguments (missing arguments
/// are absent, not an error) and must not assume call depth is bounded.
pub type CallSemantics = fn(&mut CallContext<'_>, &CallSite) -> ValueSet;

// =============================================================================
// ParameterInfo
// =============================================================================

/// One entry of a binding's parameter signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: Arc<str>,
    pub documentation: Option<Arc<str>>,
    pub optional: bool,
}

impl ParameterInfo {
    pub fn new(name: &str, documentation: &str, optional: bool) -> Self {
        Self {
            name: Arc::from(name),
            documentation: doc_text(documentation),
            optional,
        }
    }
}

fn doc_text(text: &str) -> Option<Arc<str>> {
    if text.is_empty() {
        None
    } else {
        Some(Arc::from(text))
    }
}

// =============================================================================
// BindingKind
// =============================================================================

/// What invoking a binding does.
#[derive(Clone)]
pub enum BindingKind {
    /// Fixed result, independent of the call site. An empty result means
    /// "nothing is known about the return value".
    Stub { result: ValueSet },
    /// Result computed per call site; may issue nested calls and may add
    /// properties through the value store.
    Specialized { semantics: CallSemantics },
    /// A data member. Calling it yields nothing.
    Property { value: ValueSet },
}

impl fmt::Debug for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::Stub { result } => f.debug_struct("Stub").field("result", result).finish(),
            BindingKind::Specialized { .. } => f.write_str("Specialized"),
            BindingKind::Property { value } => {
                f.debug_struct("Property").field("value", value).finish()
            }
        }
    }
}

// =============================================================================
// Binding
// =============================================================================

/// One named entry of a builtin namespace.
///
/// Built with the constructors below and refined with the `with_*` methods:
///
/// ```ignore
/// Binding::returning("parseInt", ValueId::ANY_NUMBER)
///     .with_doc("Converts A string to an integer.")
///     .with_param("s", "A string to convert into a number.")
///     .with_optional_param("radix", "A value between 2 and 36.")
/// ```
#[derive(Clone, Debug)]
pub struct Binding {
    pub name: Arc<str>,
    pub kind: BindingKind,
    /// Surfaced as a property rather than a plain data member.
    pub is_property: bool,
    pub documentation: Option<Arc<str>>,
    pub parameters: Vec<ParameterInfo>,
    /// Static members of a builtin constructor function (`prototype`,
    /// `isArray`, ...). Installed on the function object, not on the
    /// namespace that holds the binding.
    pub members: Vec<Binding>,
}

impl Binding {
    fn new(name: &str, kind: BindingKind) -> Self {
        Self {
            name: Arc::from(name),
            kind,
            is_property: false,
            documentation: None,
            parameters: Vec::new(),
            members: Vec::new(),
        }
    }

    /// A stub about whose result nothing is known.
    pub fn stub(name: &str) -> Self {
        Self::new(
            name,
            BindingKind::Stub {
                result: ValueSet::empty(),
            },
        )
    }

    /// A stub that always returns `result`.
    pub fn returning(name: &str, result: impl Into<ValueSet>) -> Self {
        Self::new(
            name,
            BindingKind::Stub {
                result: result.into(),
            },
        )
    }

    /// A builtin whose call result depends on the call site.
    pub fn specialized(name: &str, semantics: CallSemantics) -> Self {
        Self::new(name, BindingKind::Specialized { semantics })
    }

    /// A builtin property such as `Error.prototype.message`.
    pub fn property(name: &str, value: impl Into<ValueSet>) -> Self {
        let mut binding = Self::new(
            name,
            BindingKind::Property {
                value: value.into(),
            },
        );
        binding.is_property = true;
        binding
    }

    /// A plain data member such as `Math.PI` or a constructor's `prototype`.
    pub fn member(name: &str, value: impl Into<ValueSet>) -> Self {
        Self::new(
            name,
            BindingKind::Property {
                value: value.into(),
            },
        )
    }

    pub fn with_doc(mut self, documentation: &str) -> Self {
        self.documentation = doc_text(documentation);
        self
    }

    pub fn with_param(mut self, name: &str, documentation: &str) -> Self {
        self.parameters
            .push(ParameterInfo::new(name, documentation, false));
        self
    }

    pub fn with_optional_param(mut self, name: &str, documentation: &str) -> Self {
        self.parameters
            .push(ParameterInfo::new(name, documentation, true));
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = Binding>) -> Self {
        self.members.extend(members);
        self
    }

    /// Whether calling this binding means anything (stubs and specialized
    /// operations are callable, properties are not).
    pub fn is_callable(&self) -> bool {
        !matches!(self.kind, BindingKind::Property { .. })
    }

    pub fn is_specialized(&self) -> bool {
        matches!(self.kind, BindingKind::Specialized { .. })
    }

    /// The declared result of a stub.
    pub fn fixed_result(&self) -> Option<&ValueSet> {
        match &self.kind {
            BindingKind::Stub { result } => Some(result),
            _ => None,
        }
    }
}

// =============================================================================
// BindingRegistry
// =============================================================================

/// Owner of every callable binding of a built namespace.
///
/// Filled while the namespace is built, read-only afterwards.
#[derive(Default, Debug)]
pub struct BindingRegistry {
    bindings: Vec<Arc<Binding>>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding and return the reference that identifies it.
    pub fn register(&mut self, binding: Binding) -> BuiltinRef {
        let builtin = BuiltinRef(self.bindings.len() as u32);
        trace!(
            builtin = builtin.0,
            name = %binding.name,
            kind = ?binding.kind,
            "BindingRegistry::register"
        );
        self.bindings.push(Arc::new(binding));
        builtin
    }

    pub fn get(&self, builtin: BuiltinRef) -> Option<&Arc<Binding>> {
        self.bindings.get(builtin.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BuiltinRef, &Arc<Binding>)> {
        self.bindings
            .iter()
            .enumerate()
            .map(|(index, binding)| (BuiltinRef(index as u32), binding))
    }

    /// First registered binding with the given name.
    pub fn find(&self, name: &str) -> Option<(BuiltinRef, &Arc<Binding>)> {
        self.iter().find(|(_, binding)| &*binding.name == name)
    }
}

#[cfg(test)]
#[path = "../tests/binding_tests.rs"]
mod tests;
