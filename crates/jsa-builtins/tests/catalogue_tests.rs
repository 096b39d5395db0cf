use super::*;
use crate::binding::BindingRegistry;
use jsa_values::{FunctionKind, ValueData, ValueSet, ValueStore};

struct Built {
    store: ValueStore,
    handles: CatalogueHandles,
    registry: BindingRegistry,
    overrides: usize,
}

fn built(options: &BuiltinOptions) -> Built {
    let store = ValueStore::new();
    let (handles, registry, overrides) = {
        let mut builder = NamespaceBuilder::new(&store);
        let handles = build(&mut builder, options);
        let overrides = builder.overrides();
        (handles, builder.finish(), overrides)
    };
    Built {
        store,
        handles,
        registry,
        overrides,
    }
}

impl Built {
    fn get(&self, object: ObjectId, name: &str) -> ValueSet {
        self.store.get_member(object, self.store.intern_string(name))
    }

    fn object(&self, object: ObjectId, name: &str) -> ObjectId {
        let values = self.get(object, name);
        assert_eq!(values.len(), 1, "{name} should hold exactly one value");
        self.store
            .object_of(values.iter().next().unwrap())
            .unwrap_or_else(|| panic!("{name} is not an object"))
    }

    fn global(&self, name: &str) -> ObjectId {
        self.object(self.handles.global_object, name)
    }

    fn names(&self, object: ObjectId) -> Vec<String> {
        self.store
            .property_names(object)
            .into_iter()
            .map(|atom| self.store.resolve_atom(atom).to_string())
            .collect()
    }

    fn number(&self, object: ObjectId, name: &str) -> f64 {
        let values = self.get(object, name);
        match self.store.lookup(values.iter().next().unwrap()) {
            Some(ValueData::Number(n)) => n.0,
            other => panic!("{name} is not a number: {other:?}"),
        }
    }

    fn binding(&self, object: ObjectId, name: &str) -> &crate::binding::Binding {
        let function = self.get(object, name).iter().next().unwrap();
        let Some(FunctionKind::Builtin(builtin)) = self.store.function_kind(function) else {
            panic!("{name} is not a builtin function");
        };
        self.registry.get(builtin).unwrap()
    }
}

#[test]
fn test_global_names_in_catalogue_order() {
    let built = built(&BuiltinOptions::default());
    let expected = [
        "Array",
        "Boolean",
        "Date",
        "Error",
        "EvalError",
        "Function",
        "Infinity",
        "JSON",
        "Math",
        "Number",
        "Object",
        "RangeError",
        "ReferenceError",
        "RegExp",
        "String",
        "SyntaxError",
        "TypeError",
        "URIError",
        "decodeURI",
        "decodeURIComponent",
        "encodeURI",
        "encodeURIComponent",
        "escape",
        "eval",
        "isFinite",
        "isNaN",
        "parseFloat",
        "parseInt",
        "unescape",
        "undefined",
        "require",
        "GLOBAL",
        "global",
        "root",
    ];
    assert_eq!(built.names(built.handles.global_object), expected);
}

#[test]
fn test_second_infinity_entry_wins_by_default() {
    let built = built(&BuiltinOptions::default());
    let infinity = built.number(built.handles.global_object, "Infinity");
    assert!(infinity.is_nan());
    assert!(built.get(built.handles.global_object, "NaN").is_empty());
    assert!(built.overrides >= 1);
}

#[test]
fn test_without_legacy_override_nan_gets_its_own_name() {
    let options = BuiltinOptions {
        legacy_infinity_override: false,
        ..BuiltinOptions::default()
    };
    let built = built(&options);
    let global = built.handles.global_object;
    assert_eq!(built.number(global, "Infinity"), f64::INFINITY);
    assert!(built.number(global, "NaN").is_nan());
}

#[test]
fn test_aliases_refer_to_the_global_object() {
    let options = BuiltinOptions {
        global_aliases: vec!["self".to_string()],
        ..BuiltinOptions::default()
    };
    let built = built(&options);
    assert_eq!(built.global("self"), built.handles.global_object);
    assert!(built.get(built.handles.global_object, "GLOBAL").is_empty());

    let defaults = self::built(&BuiltinOptions::default());
    for alias in ["GLOBAL", "global", "root"] {
        assert_eq!(defaults.global(alias), defaults.handles.global_object);
    }
}

#[test]
fn test_prototype_handles_match_constructors() {
    let built = built(&BuiltinOptions::default());
    let h = &built.handles;
    let prototype_of = |constructor: &str| built.object(built.global(constructor), "prototype");

    assert_eq!(prototype_of("Number"), h.number_prototype);
    assert_eq!(prototype_of("String"), h.string_prototype);
    assert_eq!(prototype_of("Boolean"), h.boolean_prototype);
    assert_eq!(prototype_of("Object"), h.object_prototype);
    assert_eq!(prototype_of("Function"), h.function_prototype);
    assert_eq!(built.global("Array"), h.array_function);
}

#[test]
fn test_prototype_chains() {
    let built = built(&BuiltinOptions::default());
    let h = &built.handles;
    let store = &built.store;

    assert_eq!(store.prototype_of(h.global_object), Some(h.object_prototype));
    assert_eq!(store.prototype_of(h.object_prototype), None);
    assert_eq!(store.prototype_of(h.function_prototype), Some(h.object_prototype));
    for prototype in [h.number_prototype, h.string_prototype, h.boolean_prototype] {
        assert_eq!(store.prototype_of(prototype), Some(h.object_prototype));
    }
    for function in ["parseInt", "Array", "Object", "Error", "TypeError"] {
        assert_eq!(
            store.prototype_of(built.global(function)),
            Some(h.function_prototype),
            "{function}"
        );
    }
    let max = built.object(built.global("Math"), "max");
    assert_eq!(store.prototype_of(max), Some(h.function_prototype));

    // `call` is found on every builtin function through the chain.
    assert_eq!(built.get(built.global("parseInt"), "call").len(), 1);
    // And `hasOwnProperty` on every builtin object.
    assert_eq!(built.get(built.global("Math"), "hasOwnProperty").len(), 1);
}

#[test]
fn test_object_prototype_members() {
    let built = built(&BuiltinOptions::default());
    assert_eq!(
        built.names(built.handles.object_prototype),
        [
            "constructor",
            "hasOwnProperty",
            "isPrototypeOf",
            "propertyIsEnumerable",
            "toLocaleString",
            "toString",
            "valueOf",
        ]
    );
}

#[test]
fn test_specialized_entries() {
    let built = built(&BuiltinOptions::default());
    let array_prototype = built.object(built.handles.array_function, "prototype");
    let object = built.global("Object");

    assert!(built.binding(array_prototype, "forEach").is_specialized());
    assert!(built.binding(object, "defineProperty").is_specialized());
    assert!(built.binding(object, "defineProperties").is_specialized());
    assert!(built.binding(built.handles.global_object, "require").is_specialized());
    assert!(!built.binding(array_prototype, "map").is_specialized());
}

#[test]
fn test_require_is_a_stub_without_node_semantics() {
    let options = BuiltinOptions {
        node_require: false,
        ..BuiltinOptions::default()
    };
    let built = built(&options);
    let require = built.binding(built.handles.global_object, "require");
    assert!(!require.is_specialized());
    assert_eq!(require.fixed_result(), Some(&ValueSet::empty()));
}

#[test]
fn test_stub_results_use_representatives() {
    let built = built(&BuiltinOptions::default());
    let global = built.handles.global_object;
    let parse_int = built.binding(global, "parseInt");
    assert_eq!(
        parse_int.fixed_result(),
        Some(&ValueSet::singleton(ValueId::ANY_NUMBER))
    );
    assert_eq!(parse_int.parameters.len(), 2);
    assert!(parse_int.parameters[1].optional);

    let decode = built.binding(global, "decodeURI");
    assert_eq!(
        decode.fixed_result(),
        Some(&ValueSet::singleton(ValueId::ANY_STRING))
    );
    assert_eq!(
        built.binding(global, "isNaN").fixed_result(),
        Some(&ValueSet::singleton(ValueId::ANY_BOOLEAN))
    );
}

#[test]
fn test_json_parse_returns_one_fresh_object() {
    let built = built(&BuiltinOptions::default());
    let parse = built.binding(built.global("JSON"), "parse");
    let result = parse.fixed_result().unwrap();
    assert_eq!(result.len(), 1);
    let object = built.store.object_of(result.iter().next().unwrap()).unwrap();
    assert_eq!(
        built.store.prototype_of(object),
        Some(built.handles.object_prototype)
    );
    assert!(built.names(object).is_empty());
}

#[test]
fn test_numeric_constants() {
    let built = built(&BuiltinOptions::default());
    let math = built.global("Math");
    assert_eq!(built.number(math, "PI"), std::f64::consts::PI);
    assert_eq!(built.number(math, "LN10"), std::f64::consts::LN_10);
    assert_eq!(built.number(math, "LOG10E"), std::f64::consts::LOG10_E);
    assert!(built.get(math, "LOG10").is_empty());

    let number = built.global("Number");
    assert_eq!(built.number(number, "MIN_VALUE"), 5e-324);
    assert_eq!(built.number(number, "MAX_VALUE"), f64::MAX);
    assert!(built.number(number, "NaN").is_nan());
}

#[test]
fn test_property_bindings_are_flagged() {
    let built = built(&BuiltinOptions::default());
    let error_prototype = built.object(built.global("Error"), "prototype");
    let descriptor = built
        .store
        .own_descriptor(error_prototype, built.store.intern_string("message"))
        .unwrap();
    assert!(descriptor.is_property());
    assert_eq!(descriptor.value, ValueSet::singleton(ValueId::ANY_STRING));
}

#[test]
fn test_html_tag_methods_document_their_element() {
    let built = built(&BuiltinOptions::default());
    let big = built.binding(built.handles.string_prototype, "big");
    assert_eq!(
        big.documentation.as_deref(),
        Some("Surrounds the provided string with a <big> tag.")
    );
}

#[test]
fn test_named_errors_get_their_own_prototype() {
    let built = built(&BuiltinOptions::default());
    let type_error = built.object(built.global("TypeError"), "prototype");
    let range_error = built.object(built.global("RangeError"), "prototype");
    assert_ne!(type_error, range_error);
    assert_eq!(
        built.store.prototype_of(type_error),
        Some(built.handles.object_prototype)
    );
    assert!(built.names(type_error).contains(&"stack".to_string()));
}

#[test]
fn test_build_is_deterministic() {
    let first = built(&BuiltinOptions::default());
    let second = built(&BuiltinOptions::default());
    assert_eq!(
        first.names(first.handles.global_object),
        second.names(second.handles.global_object)
    );
    assert_eq!(first.registry.len(), second.registry.len());
    assert_eq!(first.overrides, second.overrides);
}
