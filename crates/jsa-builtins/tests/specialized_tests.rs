use super::*;
use crate::binding::BindingRegistry;
use crate::test_host::{RecordingHost, source_site};
use jsa_common::{NodeId, UnitId};

fn set(values: &[ValueId]) -> ValueSet {
    ValueSet::from_values(values.iter().copied())
}

/// A plain object whose own enumerable members are `fields`.
fn object_with(store: &ValueStore, fields: &[(&str, ValueSet)]) -> ValueId {
    let value = store.new_object(None);
    let object = store.object_of(value).unwrap();
    for (name, values) in fields {
        store.add_property(
            DefinitionSite::new(NodeId(900), UnitId(9)),
            object,
            store.intern_string(name),
            &PropertyUpdate::value(values.clone()),
        );
    }
    value
}

fn member(store: &ValueStore, value: ValueId, name: &str) -> ValueSet {
    let object = store.object_of(value).unwrap();
    store.get_member(object, store.intern_string(name))
}

fn has_member(store: &ValueStore, value: ValueId, name: &str) -> bool {
    let object = store.object_of(value).unwrap();
    store.has_own_property(object, store.intern_string(name))
}

fn run(
    store: &ValueStore,
    host: &mut RecordingHost,
    semantics: crate::binding::CallSemantics,
    site: &CallSite,
) -> ValueSet {
    let registry = BindingRegistry::new();
    let mut cx = CallContext::new(store, &registry, host);
    semantics(&mut cx, site)
}

// =============================================================================
// Object.defineProperty
// =============================================================================

#[test]
fn test_define_property_adds_value_and_returns_target() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let v = store.number(7.0);
    let x = store.new_object(None);
    let d = object_with(&store, &[("value", ValueSet::singleton(v))]);
    let foo = store.string("foo");

    let site = source_site(
        10,
        ValueSet::empty(),
        vec![set(&[x]), set(&[foo]), set(&[d])],
    );
    let result = run(&store, &mut host, define_property, &site);

    assert_eq!(result, set(&[x]));
    assert!(member(&store, x, "foo").contains(v));
    let descriptor = store
        .own_descriptor(store.object_of(x).unwrap(), store.intern_string("foo"))
        .unwrap();
    assert!(descriptor.definitions.contains(&site.definition_site()));
    assert!(host.calls.is_empty());
}

#[test]
fn test_define_property_with_accessor_descriptor() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let getter = store.new_user_function(1, None);
    let setter = store.new_user_function(2, None);
    let x = store.new_object(None);
    let d = object_with(
        &store,
        &[("get", set(&[getter])), ("set", set(&[setter]))],
    );

    let site = source_site(
        10,
        ValueSet::empty(),
        vec![set(&[x]), set(&[store.string("size")]), set(&[d])],
    );
    run(&store, &mut host, define_property, &site);

    let descriptor = store
        .own_descriptor(store.object_of(x).unwrap(), store.intern_string("size"))
        .unwrap();
    assert!(descriptor.is_accessor());
    assert_eq!(descriptor.getter, set(&[getter]));
    assert_eq!(descriptor.setter, set(&[setter]));
    assert!(descriptor.value.is_empty());
}

#[test]
fn test_define_property_with_empty_descriptor_defines_undefined() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let x = store.new_object(None);
    let d = store.new_object(None);

    let site = source_site(
        10,
        ValueSet::empty(),
        vec![set(&[x]), set(&[store.string("bare")]), set(&[d])],
    );
    run(&store, &mut host, define_property, &site);

    assert_eq!(member(&store, x, "bare"), ValueSet::undefined());
}

#[test]
fn test_define_property_crosses_every_combination() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let one = store.number(1.0);
    let two = store.number(2.0);
    let x = store.new_object(None);
    let y = store.new_object(None);
    let d1 = object_with(&store, &[("value", set(&[one]))]);
    let d2 = object_with(&store, &[("value", set(&[two]))]);

    let site = source_site(
        10,
        ValueSet::empty(),
        vec![
            set(&[x, y]),
            set(&[store.string("a"), store.string("b")]),
            set(&[d1, d2]),
        ],
    );
    let result = run(&store, &mut host, define_property, &site);

    assert_eq!(result, set(&[x, y]));
    for target in [x, y] {
        for name in ["a", "b"] {
            assert_eq!(member(&store, target, name), set(&[one, two]));
        }
    }
}

#[test]
fn test_define_property_skips_non_constant_names() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let x = store.new_object(None);
    let d = object_with(&store, &[("value", set(&[ValueId::TRUE]))]);
    let before = store.property_names(store.object_of(x).unwrap());

    // A number and an object are not string constants.
    let site = source_site(
        10,
        ValueSet::empty(),
        vec![set(&[x]), set(&[ValueId::ZERO, d]), set(&[d])],
    );
    let result = run(&store, &mut host, define_property, &site);

    assert_eq!(result, set(&[x]));
    assert_eq!(store.property_names(store.object_of(x).unwrap()), before);
}

#[test]
fn test_define_property_ignores_non_object_targets_and_descriptors() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let x = store.new_object(None);
    let name = store.string("p");

    let site = source_site(
        10,
        ValueSet::empty(),
        vec![set(&[x, ValueId::NULL]), set(&[name]), set(&[ValueId::ZERO])],
    );
    let result = run(&store, &mut host, define_property, &site);

    assert_eq!(result, set(&[x, ValueId::NULL]));
    assert!(!has_member(&store, x, "p"));
}

#[test]
fn test_define_property_respects_non_extensible_targets() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let x = store.new_object(None);
    store.prevent_extensions(store.object_of(x).unwrap());
    let d = object_with(&store, &[("value", set(&[ValueId::TRUE]))]);

    let site = source_site(
        10,
        ValueSet::empty(),
        vec![set(&[x]), set(&[store.string("p")]), set(&[d])],
    );
    let result = run(&store, &mut host, define_property, &site);

    assert_eq!(result, set(&[x]));
    assert!(!has_member(&store, x, "p"));
}

#[test]
fn test_define_property_is_monotone() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let one = store.number(1.0);
    let two = store.number(2.0);
    let x = object_with(&store, &[("foo", set(&[one])), ("bar", set(&[one]))]);
    let d = object_with(&store, &[("value", set(&[two]))]);

    let site = source_site(
        10,
        ValueSet::empty(),
        vec![set(&[x]), set(&[store.string("foo")]), set(&[d])],
    );
    run(&store, &mut host, define_property, &site);
    run(&store, &mut host, define_property, &site);

    assert_eq!(member(&store, x, "foo"), set(&[one, two]));
    assert_eq!(member(&store, x, "bar"), set(&[one]));
}

#[test]
fn test_define_property_with_missing_arguments() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let x = store.new_object(None);
    let before = store.property_names(store.object_of(x).unwrap());

    let none = source_site(10, ValueSet::empty(), vec![]);
    assert!(run(&store, &mut host, define_property, &none).is_empty());

    let one = source_site(10, ValueSet::empty(), vec![set(&[x])]);
    assert_eq!(run(&store, &mut host, define_property, &one), set(&[x]));

    let two = source_site(10, ValueSet::empty(), vec![set(&[x]), set(&[store.string("p")])]);
    assert_eq!(run(&store, &mut host, define_property, &two), set(&[x]));

    assert_eq!(store.property_names(store.object_of(x).unwrap()), before);
}

// =============================================================================
// Object.defineProperties
// =============================================================================

#[test]
fn test_define_properties_defines_each_bag_member() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let one = store.number(1.0);
    let getter = store.new_user_function(3, None);
    let x = store.new_object(None);
    let a = object_with(&store, &[("value", set(&[one]))]);
    let b = object_with(&store, &[("get", set(&[getter]))]);
    let bag = object_with(&store, &[("a", set(&[a])), ("b", set(&[b]))]);

    let site = source_site(11, ValueSet::empty(), vec![set(&[x]), set(&[bag])]);
    let result = run(&store, &mut host, define_properties, &site);

    assert_eq!(result, set(&[x]));
    assert_eq!(member(&store, x, "a"), set(&[one]));
    let descriptor = store
        .own_descriptor(store.object_of(x).unwrap(), store.intern_string("b"))
        .unwrap();
    assert_eq!(descriptor.getter, set(&[getter]));
}

#[test]
fn test_define_properties_skips_non_enumerable_members() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let x = store.new_object(None);
    let d = object_with(&store, &[("value", set(&[ValueId::TRUE]))]);
    let bag = store.new_object(None);
    store.define_builtin(
        store.object_of(bag).unwrap(),
        store.intern_string("hidden"),
        jsa_values::PropertyDescriptor::builtin(set(&[d]), false, None),
    );

    let site = source_site(11, ValueSet::empty(), vec![set(&[x]), set(&[bag])]);
    run(&store, &mut host, define_properties, &site);

    assert!(!has_member(&store, x, "hidden"));
}

#[test]
fn test_define_properties_ignores_accessor_members() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let x = store.new_object(None);
    let getter = store.new_user_function(4, None);
    let bag = store.new_object(None);
    store.add_property(
        DefinitionSite::new(NodeId(900), UnitId(9)),
        store.object_of(bag).unwrap(),
        store.intern_string("lazy"),
        &PropertyUpdate {
            getter: set(&[getter]),
            ..PropertyUpdate::default()
        },
    );

    let site = source_site(11, ValueSet::empty(), vec![set(&[x]), set(&[bag])]);
    let result = run(&store, &mut host, define_properties, &site);

    assert_eq!(result, set(&[x]));
    assert!(!has_member(&store, x, "lazy"));
    assert!(host.calls.is_empty());
}

#[test]
fn test_define_properties_on_its_own_bag() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let d = object_with(&store, &[("value", set(&[ValueId::NULL]))]);
    let bag = object_with(&store, &[("self", set(&[d]))]);

    let site = source_site(11, ValueSet::empty(), vec![set(&[bag]), set(&[bag])]);
    let result = run(&store, &mut host, define_properties, &site);

    assert_eq!(result, set(&[bag]));
    assert_eq!(member(&store, bag, "self"), set(&[d, ValueId::NULL]));
}

#[test]
fn test_define_properties_with_missing_arguments() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let x = store.new_object(None);

    let none = source_site(11, ValueSet::empty(), vec![]);
    assert!(run(&store, &mut host, define_properties, &none).is_empty());

    let one = source_site(11, ValueSet::empty(), vec![set(&[x])]);
    assert_eq!(run(&store, &mut host, define_properties, &one), set(&[x]));
    assert!(store.property_names(store.object_of(x).unwrap()).is_empty());
}

// =============================================================================
// Array.prototype.forEach
// =============================================================================

#[test]
fn test_for_each_calls_callback_with_element_values() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let number = store.number(3.0);
    let array = store.new_array(None, vec![set(&[number])]);
    let callback = store.new_user_function(1, None);

    let site = source_site(12, set(&[array]), vec![set(&[callback])]);
    let result = run(&store, &mut host, array_for_each, &site);

    assert_eq!(result, ValueSet::undefined());
    assert_eq!(host.calls.len(), 1);
    let call = &host.calls[0];
    assert_eq!(call.callee, set(&[callback]));
    assert_eq!(
        call.site.args,
        vec![set(&[number]), ValueSet::empty(), set(&[array])]
    );
    assert!(call.site.this.is_empty());
    assert_eq!(call.site.node, site.node);
    assert_eq!(
        call.site.origin,
        crate::dispatch::CallOrigin::Synthetic {
            builtin: store.intern_string("forEach")
        }
    );
}

#[test]
fn test_for_each_passes_this_arg() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let array = store.new_array(None, vec![set(&[ValueId::TRUE])]);
    let callback = store.new_user_function(1, None);
    let this_arg = store.new_object(None);

    let site = source_site(
        12,
        set(&[array]),
        vec![set(&[callback]), set(&[this_arg])],
    );
    run(&store, &mut host, array_for_each, &site);

    assert_eq!(host.calls.len(), 1);
    assert_eq!(host.calls[0].site.this, set(&[this_arg]));
}

#[test]
fn test_for_each_calls_once_per_distinct_slot_set() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let one = store.number(1.0);
    let text = store.string("a");
    let first = store.new_array(None, vec![set(&[one]), set(&[one]), set(&[text])]);
    let second = store.new_array(None, vec![set(&[text])]);
    let callback = store.new_user_function(1, None);

    let site = source_site(12, set(&[first, second]), vec![set(&[callback])]);
    run(&store, &mut host, array_for_each, &site);

    let elements: Vec<&ValueSet> = host.calls.iter().map(|c| &c.site.args[0]).collect();
    assert_eq!(elements.len(), 2);
    assert!(elements.contains(&&set(&[one])));
    assert!(elements.contains(&&set(&[text])));
}

#[test]
fn test_for_each_without_work_makes_no_calls() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();
    let array = store.new_array(None, vec![set(&[ValueId::TRUE])]);
    let empty_array = store.new_array(None, vec![]);
    let plain = store.new_object(None);
    let callback = store.new_user_function(1, None);

    let no_args = source_site(12, set(&[array]), vec![]);
    assert_eq!(
        run(&store, &mut host, array_for_each, &no_args),
        ValueSet::undefined()
    );

    let no_callee = source_site(12, set(&[array]), vec![ValueSet::empty()]);
    assert_eq!(
        run(&store, &mut host, array_for_each, &no_callee),
        ValueSet::undefined()
    );

    let not_arrays = source_site(
        12,
        set(&[plain, ValueId::ZERO, empty_array]),
        vec![set(&[callback])],
    );
    assert_eq!(
        run(&store, &mut host, array_for_each, &not_arrays),
        ValueSet::undefined()
    );

    assert!(host.calls.is_empty());
}

// =============================================================================
// require
// =============================================================================

#[test]
fn test_require_resolves_constant_module_names() {
    let store = ValueStore::new();
    let exports = store.new_object(None);
    let mut host = RecordingHost::new()
        .with_exports("fs", set(&[exports]))
        .with_module_name(UnitId(1), "lib/app.js");

    let site = source_site(13, ValueSet::empty(), vec![set(&[store.string("fs")])]);
    let result = run(&store, &mut host, require, &site);

    assert_eq!(result, set(&[exports]));
    assert_eq!(host.requires.len(), 1);
    let request = &host.requires[0];
    assert_eq!(request.module, "fs");
    assert_eq!(request.requesting_module, "lib/app.js");
    assert_eq!(request.node, NodeId(13));
    assert_eq!(request.unit, UnitId(1));
}

#[test]
fn test_require_unions_every_constant() {
    let store = ValueStore::new();
    let fs = store.new_object(None);
    let path = store.new_object(None);
    let mut host = RecordingHost::new()
        .with_exports("fs", set(&[fs]))
        .with_exports("path", set(&[path]));

    let site = source_site(
        13,
        ValueSet::empty(),
        vec![set(&[store.string("fs"), store.string("path"), ValueId::ZERO])],
    );
    let result = run(&store, &mut host, require, &site);

    assert_eq!(result, set(&[fs, path]));
    assert_eq!(host.requires.len(), 2);
    assert_eq!(host.name_queries.get(), 1);
}

#[test]
fn test_require_with_non_constant_argument_is_empty() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new().with_exports("fs", set(&[ValueId::TRUE]));
    let unknown = store.new_object(None);

    let site = source_site(13, ValueSet::empty(), vec![set(&[unknown])]);
    assert!(run(&store, &mut host, require, &site).is_empty());

    let empty = source_site(13, ValueSet::empty(), vec![ValueSet::empty()]);
    assert!(run(&store, &mut host, require, &empty).is_empty());

    assert!(host.requires.is_empty());
    assert_eq!(host.name_queries.get(), 0);
}

#[test]
fn test_require_without_arguments_is_empty() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();

    let site = source_site(13, ValueSet::empty(), vec![]);
    assert!(run(&store, &mut host, require, &site).is_empty());
    assert!(host.requires.is_empty());
}

#[test]
fn test_require_of_unknown_module_is_empty() {
    let store = ValueStore::new();
    let mut host = RecordingHost::new();

    let site = source_site(13, ValueSet::empty(), vec![set(&[store.string("missing")])]);
    assert!(run(&store, &mut host, require, &site).is_empty());
    assert_eq!(host.requires.len(), 1);
}
