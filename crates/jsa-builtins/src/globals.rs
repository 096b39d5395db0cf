//! The global namespace and its handles.
//!
//! [`Globals::build`] runs once at analyzer startup. Afterwards the global
//! object and every builtin reachable from it are shared, read-only state;
//! `Globals` is `Send + Sync` and can be handed to every analysis thread.

use crate::binding::{Binding, BindingRegistry};
use crate::catalogue;
use crate::dispatch::{AnalysisHost, CallContext};
use crate::namespace::NamespaceBuilder;
use crate::options::BuiltinOptions;
use jsa_values::{FunctionKind, ObjectId, ValueId, ValueSet, ValueStore};
use std::sync::Arc;
use tracing::{debug, info_span};

/// Handles to the builtin objects a host wires into its environment model.
#[derive(Debug, Clone)]
pub struct Globals {
    pub global_object: ObjectId,
    pub object_prototype: ObjectId,
    pub number_prototype: ObjectId,
    pub string_prototype: ObjectId,
    pub boolean_prototype: ObjectId,
    /// `Function.prototype`, itself a builtin function.
    pub function_prototype: ObjectId,
    /// The `Array` constructor.
    pub array_function: ObjectId,
    registry: Arc<BindingRegistry>,
}

impl Globals {
    /// Build the global namespace into `store`.
    pub fn build(store: &ValueStore, options: &BuiltinOptions) -> Self {
        let _span = info_span!("Globals::build").entered();

        let mut builder = NamespaceBuilder::new(store);
        let handles = catalogue::build(&mut builder, options);
        let overrides = builder.overrides();
        let registry = builder.finish();

        debug!(
            bindings = registry.len(),
            objects = store.object_count(),
            overrides,
            "builtin namespace ready"
        );

        Self {
            global_object: handles.global_object,
            object_prototype: handles.object_prototype,
            number_prototype: handles.number_prototype,
            string_prototype: handles.string_prototype,
            boolean_prototype: handles.boolean_prototype,
            function_prototype: handles.function_prototype,
            array_function: handles.array_function,
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &Arc<BindingRegistry> {
        &self.registry
    }

    /// The value referencing the global object.
    pub fn global_value(&self, store: &ValueStore) -> ValueId {
        store.object_value(self.global_object)
    }

    /// Values of the global `name`. Empty if there is no such global.
    pub fn lookup(&self, store: &ValueStore, name: &str) -> ValueSet {
        match store.lookup_string(name) {
            Some(atom) => store.get_member(self.global_object, atom),
            None => ValueSet::empty(),
        }
    }

    /// Values of `path` resolved member by member from the global object,
    /// e.g. `["Array", "prototype", "forEach"]`.
    pub fn lookup_path(&self, store: &ValueStore, path: &[&str]) -> ValueSet {
        let mut current = ValueSet::singleton(self.global_value(store));
        for segment in path {
            let Some(atom) = store.lookup_string(segment) else {
                return ValueSet::empty();
            };
            current = current
                .iter()
                .filter_map(|value| store.object_of(value))
                .fold(ValueSet::empty(), |acc, object| {
                    acc.union(&store.get_member(object, atom))
                });
        }
        current
    }

    /// The binding behind a builtin function value.
    pub fn binding_of(&self, store: &ValueStore, value: ValueId) -> Option<&Arc<Binding>> {
        match store.function_kind(value)? {
            FunctionKind::Builtin(builtin) => self.registry.get(builtin),
            FunctionKind::User(_) => None,
        }
    }

    /// A call context over this namespace.
    pub fn call_context<'a>(
        &'a self,
        store: &'a ValueStore,
        host: &'a mut dyn AnalysisHost,
    ) -> CallContext<'a> {
        CallContext::new(store, &self.registry, host)
    }
}

#[cfg(test)]
#[path = "../tests/globals_tests.rs"]
mod tests;
