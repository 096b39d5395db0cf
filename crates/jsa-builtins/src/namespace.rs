//! Namespace construction.
//!
//! `NamespaceBuilder` turns ordered binding lists into objects in the value
//! store. Callable bindings become builtin function objects backed by the
//! registry; property bindings become data members. Building is purely
//! constructive: nothing here reaches the analysis host.
//!
//! Within one object names are unique and a later binding replaces an earlier
//! one with the same name. Overrides are counted and logged at debug level.

use crate::binding::{Binding, BindingKind, BindingRegistry};
use jsa_common::Atom;
use jsa_values::{
    FunctionKind, ObjectId, ObjectKind, PropertyDescriptor, ValueId, ValueSet, ValueStore,
};
use tracing::{debug, trace};

pub struct NamespaceBuilder<'a> {
    store: &'a ValueStore,
    registry: BindingRegistry,
    /// `[[Prototype]]` given to every builtin function object allocated after
    /// the function prototype has been bootstrapped.
    function_prototype: Option<ObjectId>,
    overrides: usize,
}

impl<'a> NamespaceBuilder<'a> {
    pub fn new(store: &'a ValueStore) -> Self {
        Self {
            store,
            registry: BindingRegistry::new(),
            function_prototype: None,
            overrides: 0,
        }
    }

    pub fn store(&self) -> &'a ValueStore {
        self.store
    }

    pub fn function_prototype(&self) -> Option<ObjectId> {
        self.function_prototype
    }

    /// Number of bindings that replaced an earlier binding of the same name.
    pub fn overrides(&self) -> usize {
        self.overrides
    }

    /// Build a plain object holding `bindings`, in order.
    pub fn object(
        &mut self,
        prototype: Option<ObjectId>,
        bindings: impl IntoIterator<Item = Binding>,
    ) -> ObjectId {
        let object = self.store.alloc_object(ObjectKind::Plain, prototype);
        for binding in bindings {
            self.install(object, binding);
        }
        object
    }

    /// Build a builtin function object for a callable binding and return the
    /// value referencing it. Static members are installed on the function.
    pub fn function(&mut self, binding: Binding) -> ValueId {
        let object = self.function_object(binding);
        self.store.object_value(object)
    }

    /// Like [`function`](Self::function), returning the function object.
    pub fn function_object(&mut self, mut binding: Binding) -> ObjectId {
        debug_assert!(binding.is_callable(), "property binding used as a function");
        let members = std::mem::take(&mut binding.members);
        let builtin = self.registry.register(binding);
        let object = self.store.alloc_object(
            ObjectKind::Function(FunctionKind::Builtin(builtin)),
            self.function_prototype,
        );
        for member in members {
            self.install(object, member);
        }
        object
    }

    /// Build the function that serves as every builtin function's
    /// `[[Prototype]]`.
    ///
    /// The prototype function itself has no `[[Prototype]]`; its members are
    /// installed after it is in place so they link back to it.
    pub fn bootstrap_function_prototype(&mut self, mut binding: Binding) -> ObjectId {
        debug_assert!(self.function_prototype.is_none(), "function prototype bootstrapped twice");
        let members = std::mem::take(&mut binding.members);
        let builtin = self.registry.register(binding);
        let object = self
            .store
            .alloc_object(ObjectKind::Function(FunctionKind::Builtin(builtin)), None);
        self.function_prototype = Some(object);
        for member in members {
            self.install(object, member);
        }
        object
    }

    /// Install one binding on an existing object, replacing any previous
    /// member with the same name.
    pub fn install(&mut self, object: ObjectId, binding: Binding) {
        let name = self.store.intern_string(&binding.name);
        let documentation = binding.documentation.clone();
        if let BindingKind::Property { value } = &binding.kind {
            let descriptor =
                PropertyDescriptor::builtin(value.clone(), binding.is_property, documentation);
            self.put(object, name, descriptor);
            return;
        }
        let function = self.function(binding);
        self.put(
            object,
            name,
            PropertyDescriptor::builtin(ValueSet::singleton(function), false, documentation),
        );
    }

    /// Insert `value` under `name`. Used to expose one object under several
    /// keys (`GLOBAL`, `global`, `root`).
    pub fn alias(&mut self, object: ObjectId, name: &str, value: ValueId) {
        let atom = self.store.intern_string(name);
        trace!(object = object.0, name, value = value.0, "NamespaceBuilder::alias");
        self.put(
            object,
            atom,
            PropertyDescriptor::builtin(ValueSet::singleton(value), false, None),
        );
    }

    fn put(&mut self, object: ObjectId, name: Atom, descriptor: PropertyDescriptor) {
        if let Some(previous) = self.store.define_builtin(object, name, descriptor) {
            self.overrides += 1;
            debug!(
                object = object.0,
                name = %self.store.resolve_atom(name),
                previous = ?previous.value,
                "duplicate builtin name, later entry wins"
            );
        }
    }

    /// Finish building and hand over the registry.
    pub fn finish(self) -> BindingRegistry {
        trace!(
            bindings = self.registry.len(),
            overrides = self.overrides,
            "NamespaceBuilder::finish"
        );
        self.registry
    }
}

#[cfg(test)]
#[path = "../tests/namespace_tests.rs"]
mod tests;
