//! Call-semantics dispatch.
//!
//! When the analyzer evaluates a call whose callee may be a builtin function,
//! it builds a [`CallSite`] and hands it to [`dispatch`] together with a
//! [`CallContext`]. Stubs answer with their fixed result; specialized
//! operations run their semantics function, which may call back into the
//! analyzer through [`AnalysisHost`].
//!
//! Callback invocations made on behalf of a builtin (the `forEach` callback,
//! for instance) go through [`CallContext::synthetic_call`], which tags the
//! call site with [`CallOrigin::Synthetic`] so the host can tell them apart
//! from calls written in source.

use crate::binding::{Binding, BindingKind, BindingRegistry};
use jsa_common::{Atom, NodeId, UnitId};
use jsa_values::{DefinitionSite, FunctionKind, ValueId, ValueSet, ValueStore};
use std::sync::Arc;
use tracing::{debug, trace};

// =============================================================================
// CallSite
// =============================================================================

/// Where a call came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallOrigin {
    /// A call expression in the analyzed program.
    Source,
    /// A call simulated by a builtin operation.
    Synthetic {
        /// Name of the builtin that issued the call.
        builtin: Atom,
    },
}

/// One call being evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// The call expression.
    pub node: NodeId,
    /// The analysis unit the call is evaluated in; changes caused by the call
    /// are attributed to it.
    pub unit: UnitId,
    /// Receiver values.
    pub this: ValueSet,
    /// One value set per supplied argument. Never mutated in place.
    pub args: Vec<ValueSet>,
    pub origin: CallOrigin,
}

impl CallSite {
    /// A call written in source.
    pub fn new(node: NodeId, unit: UnitId, this: ValueSet, args: Vec<ValueSet>) -> Self {
        Self {
            node,
            unit,
            this,
            args,
            origin: CallOrigin::Source,
        }
    }

    /// The `index`th argument, if it was supplied.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&ValueSet> {
        self.args.get(index)
    }

    #[inline]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.origin, CallOrigin::Synthetic { .. })
    }

    /// Authorship recorded on properties this call defines.
    pub fn definition_site(&self) -> DefinitionSite {
        DefinitionSite::new(self.node, self.unit)
    }
}

// =============================================================================
// AnalysisHost
// =============================================================================

/// The surrounding analyzer, as seen by builtin operations.
///
/// Implementations may re-enter [`dispatch`] from [`call`](Self::call) for a
/// different call site; recursion protection for such nesting belongs to the
/// host.
pub trait AnalysisHost {
    /// Invoke every function in `callee` at `site` and return the union of
    /// their results.
    fn call(&mut self, store: &ValueStore, callee: &ValueSet, site: &CallSite) -> ValueSet;

    /// Resolve `module` as required from `requesting_module` and return its
    /// exports.
    fn require_module(
        &mut self,
        store: &ValueStore,
        node: NodeId,
        unit: UnitId,
        module: &str,
        requesting_module: &str,
    ) -> ValueSet;

    /// Name of the module whose code `unit` analyzes.
    fn declaring_module_name(&self, unit: UnitId) -> Arc<str>;
}

// =============================================================================
// CallContext
// =============================================================================

/// Collaborators available to a builtin while it evaluates one call.
pub struct CallContext<'a> {
    pub store: &'a ValueStore,
    pub registry: &'a BindingRegistry,
    pub host: &'a mut dyn AnalysisHost,
}

impl<'a> CallContext<'a> {
    pub fn new(
        store: &'a ValueStore,
        registry: &'a BindingRegistry,
        host: &'a mut dyn AnalysisHost,
    ) -> Self {
        Self {
            store,
            registry,
            host,
        }
    }

    /// Simulate a call to `callee` on behalf of the builtin `builtin`.
    ///
    /// The nested call inherits the node and unit of `site`, so whatever it
    /// causes is attributed to the builtin call that triggered it.
    pub fn synthetic_call(
        &mut self,
        site: &CallSite,
        builtin: Atom,
        callee: &ValueSet,
        this: ValueSet,
        args: Vec<ValueSet>,
    ) -> ValueSet {
        let nested = CallSite {
            node: site.node,
            unit: site.unit,
            this,
            args,
            origin: CallOrigin::Synthetic { builtin },
        };
        trace!(
            node = %site.node,
            unit = %site.unit,
            builtin = builtin.0,
            callees = callee.len(),
            "synthetic call"
        );
        self.host.call(self.store, callee, &nested)
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Evaluate a call to `binding`.
pub fn dispatch(binding: &Binding, cx: &mut CallContext<'_>, site: &CallSite) -> ValueSet {
    match &binding.kind {
        BindingKind::Stub { result } => result.clone(),
        BindingKind::Specialized { semantics } => {
            trace!(
                name = %binding.name,
                node = %site.node,
                unit = %site.unit,
                args = site.arg_count(),
                "dispatch specialized builtin"
            );
            semantics(cx, site)
        }
        BindingKind::Property { .. } => {
            debug!(name = %binding.name, "call to non-callable builtin property");
            ValueSet::empty()
        }
    }
}

/// Evaluate a call whose callee is the single value `callee`.
///
/// Returns `None` when `callee` is not a builtin function of this registry,
/// leaving the call to the host.
pub fn call_builtin(cx: &mut CallContext<'_>, callee: ValueId, site: &CallSite) -> Option<ValueSet> {
    let FunctionKind::Builtin(builtin) = cx.store.function_kind(callee)? else {
        return None;
    };
    let registry = cx.registry;
    let binding = registry.get(builtin)?;
    Some(dispatch(binding, cx, site))
}

#[cfg(test)]
#[path = "../tests/dispatch_tests.rs"]
mod tests;
