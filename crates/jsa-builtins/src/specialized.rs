//! Specialized builtin operations.
//!
//! Each function here is a [`CallSemantics`](crate::binding::CallSemantics):
//! it reads the call site, may issue synthetic calls or add properties
//! through the value store, and returns the builtin's result. All of them are
//! total: missing arguments, non-constant names and unexpected receiver
//! shapes reduce precision, never fail.
//!
//! Property additions are monotone. They go through
//! [`ValueStore::add_property`], which only adds names and widens value sets.

use crate::dispatch::{CallContext, CallSite};
use jsa_common::Atom;
use jsa_values::{
    DefinitionSite, ObjectId, PropertyChange, PropertyUpdate, ValueId, ValueSet, ValueStore,
};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// `Array.prototype.forEach(callback, thisArg?)`
///
/// Calls `callback` once per distinct element value set of every array in
/// the receiver, with arguments `(elements, index, receiver)`. The index is
/// not modeled and is passed as the empty set. Returns `undefined`.
pub fn array_for_each(cx: &mut CallContext<'_>, site: &CallSite) -> ValueSet {
    let Some(callback) = site.arg(0) else {
        return ValueSet::undefined();
    };
    if callback.is_empty() {
        return ValueSet::undefined();
    }
    let callback_this = site.arg(1).cloned().unwrap_or_default();
    let builtin = cx.store.intern_string("forEach");

    let mut propagated: FxHashSet<ValueSet> = FxHashSet::default();
    for receiver in &site.this {
        let Some(array) = cx.store.array_of(receiver) else {
            trace!(value = receiver.0, "forEach receiver is not an array");
            continue;
        };
        for elements in cx.store.index_types(array) {
            if !propagated.insert(elements.clone()) {
                continue;
            }
            cx.synthetic_call(
                site,
                builtin,
                callback,
                callback_this.clone(),
                vec![elements, ValueSet::empty(), site.this.clone()],
            );
        }
    }
    ValueSet::undefined()
}

/// `Object.defineProperty(o, p, attributes)`
///
/// Defines `p` on every extensible object in `o` for every string constant
/// in `p` and every descriptor in `attributes`. Returns `o`.
pub fn define_property(cx: &mut CallContext<'_>, site: &CallSite) -> ValueSet {
    if let [targets, names, descriptors, ..] = site.args.as_slice() {
        let definition = site.definition_site();
        for target in targets {
            let Some(object) = cx.store.expando_of(target) else {
                continue;
            };
            for name in names {
                let Some(name) = cx.store.constant_atom(name) else {
                    debug!(
                        node = %site.node,
                        value = name.0,
                        "defineProperty: skipping non-constant property name"
                    );
                    continue;
                };
                for descriptor in descriptors {
                    apply_descriptor(cx.store, definition, object, name, descriptor);
                }
            }
        }
    }
    first_argument(site)
}

/// `Object.defineProperties(o, properties)`
///
/// For every own enumerable member of every object in `properties`, defines
/// a property of the same name on every extensible object in `o`, treating
/// each member value as a descriptor. Returns `o`.
///
/// Only the data half of a member is read. A member defined by an accessor
/// would need its getter called to produce the descriptor, so it defines
/// nothing.
pub fn define_properties(cx: &mut CallContext<'_>, site: &CallSite) -> ValueSet {
    if let [targets, bags, ..] = site.args.as_slice() {
        let definition = site.definition_site();
        for target in targets {
            let Some(object) = cx.store.expando_of(target) else {
                continue;
            };
            for bag in bags {
                let Some(bag) = cx.store.object_of(bag) else {
                    continue;
                };
                // Snapshot first: `object` and `bag` may be the same entry.
                for (name, member) in cx.store.descriptors(bag) {
                    if !member.is_enumerable() {
                        continue;
                    }
                    for descriptor in &member.value {
                        apply_descriptor(cx.store, definition, object, name, descriptor);
                    }
                }
            }
        }
    }
    first_argument(site)
}

/// `require(id)`
///
/// Resolves every string constant in `id` through the host and returns the
/// union of the resulting exports. Anything else contributes nothing.
pub fn require(cx: &mut CallContext<'_>, site: &CallSite) -> ValueSet {
    let Some(ids) = site.arg(0) else {
        return ValueSet::empty();
    };

    let mut requesting_module = None;
    let mut exports = ValueSet::empty();
    for id in ids {
        let Some(module) = cx.store.constant_string(id) else {
            debug!(node = %site.node, value = id.0, "require: skipping non-constant module id");
            continue;
        };
        let requesting: &str =
            requesting_module.get_or_insert_with(|| cx.host.declaring_module_name(site.unit));
        trace!(node = %site.node, module = %module, requesting = %requesting, "require");
        let resolved =
            cx.host
                .require_module(cx.store, site.node, site.unit, &module, requesting);
        exports = exports.union(&resolved);
    }
    exports
}

fn first_argument(site: &CallSite) -> ValueSet {
    site.arg(0).cloned().unwrap_or_default()
}

/// Define `name` on `object` from the descriptor object `descriptor`.
///
/// Reads the descriptor's `value`, `get` and `set` members. A descriptor
/// with none of them defines the property as `undefined`; a descriptor that
/// is not an object defines nothing.
fn apply_descriptor(
    store: &ValueStore,
    definition: DefinitionSite,
    object: ObjectId,
    name: Atom,
    descriptor: ValueId,
) -> PropertyChange {
    let Some(fields) = store.object_of(descriptor) else {
        return PropertyChange::Unchanged;
    };

    let field = |key: &str| {
        let key = store.intern_string(key);
        store.lookup_descriptor(fields, key).map(|d| d.value)
    };
    let value = field("value");
    let getter = field("get");
    let setter = field("set");

    let update = if value.is_none() && getter.is_none() && setter.is_none() {
        PropertyUpdate::value(ValueSet::undefined())
    } else {
        PropertyUpdate {
            value: value.unwrap_or_default(),
            getter: getter.unwrap_or_default(),
            setter: setter.unwrap_or_default(),
        }
    };
    store.add_property(definition, object, name, &update)
}

#[cfg(test)]
#[path = "../tests/specialized_tests.rs"]
mod tests;
