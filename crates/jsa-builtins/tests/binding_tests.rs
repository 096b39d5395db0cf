use super::*;
use crate::specialized;
use jsa_values::ValueId;

#[test]
fn test_stub_without_result_knows_nothing() {
    let binding = Binding::stub("escape");
    assert!(binding.is_callable());
    assert!(!binding.is_specialized());
    assert_eq!(binding.fixed_result(), Some(&ValueSet::empty()));
    assert!(binding.documentation.is_none());
    assert!(binding.parameters.is_empty());
}

#[test]
fn test_returning_stub_declares_its_result() {
    let binding = Binding::returning("parseInt", ValueId::ZERO);
    assert_eq!(
        binding.fixed_result(),
        Some(&ValueSet::singleton(ValueId::ZERO))
    );
    assert!(!binding.is_property);
}

#[test]
fn test_specialized_binding_has_no_fixed_result() {
    let binding = Binding::specialized("forEach", specialized::array_for_each);
    assert!(binding.is_callable());
    assert!(binding.is_specialized());
    assert!(binding.fixed_result().is_none());
}

#[test]
fn test_property_and_member_are_not_callable() {
    let property = Binding::property("message", ValueId::EMPTY_STRING);
    assert!(!property.is_callable());
    assert!(property.is_property);

    let member = Binding::member("PI", ValueId::ZERO);
    assert!(!member.is_callable());
    assert!(!member.is_property);
    match &member.kind {
        BindingKind::Property { value } => {
            assert_eq!(value, &ValueSet::singleton(ValueId::ZERO));
        }
        other => panic!("expected property kind, got {other:?}"),
    }
}

#[test]
fn test_builder_methods_accumulate_signature() {
    let binding = Binding::returning("parseInt", ValueId::ZERO)
        .with_doc("Converts A string to an integer.")
        .with_param("s", "A string to convert into a number.")
        .with_optional_param("radix", "A value between 2 and 36.");

    assert_eq!(
        binding.documentation.as_deref(),
        Some("Converts A string to an integer.")
    );
    assert_eq!(binding.parameters.len(), 2);
    assert_eq!(&*binding.parameters[0].name, "s");
    assert!(!binding.parameters[0].optional);
    assert_eq!(&*binding.parameters[1].name, "radix");
    assert!(binding.parameters[1].optional);
}

#[test]
fn test_empty_documentation_is_absent() {
    let binding = Binding::stub("concat").with_doc("").with_param("item", "");
    assert!(binding.documentation.is_none());
    assert!(binding.parameters[0].documentation.is_none());
}

#[test]
fn test_members_are_kept_in_order() {
    let binding = Binding::stub("Array").with_members([
        Binding::member("prototype", ValueId::NULL),
        Binding::returning("isArray", ValueId::FALSE),
    ]);
    let names: Vec<&str> = binding.members.iter().map(|m| &*m.name).collect();
    assert_eq!(names, ["prototype", "isArray"]);
}

#[test]
fn test_debug_hides_semantics_pointer() {
    let binding = Binding::specialized("require", specialized::require);
    assert_eq!(format!("{:?}", binding.kind), "Specialized");
    let stub = Binding::returning("toString", ValueId::EMPTY_STRING);
    assert!(format!("{:?}", stub.kind).starts_with("Stub"));
}

#[test]
fn test_registry_hands_out_sequential_refs() {
    let mut registry = BindingRegistry::new();
    assert!(registry.is_empty());

    let first = registry.register(Binding::stub("escape"));
    let second = registry.register(Binding::stub("unescape"));
    assert_eq!(first, BuiltinRef(0));
    assert_eq!(second, BuiltinRef(1));
    assert_eq!(registry.len(), 2);

    assert_eq!(&*registry.get(second).unwrap().name, "unescape");
    assert!(registry.get(BuiltinRef(7)).is_none());
}

#[test]
fn test_registry_find_returns_first_match() {
    let mut registry = BindingRegistry::new();
    let first = registry.register(Binding::returning("toString", ValueId::EMPTY_STRING));
    registry.register(Binding::stub("toString"));

    let (found, binding) = registry.find("toString").unwrap();
    assert_eq!(found, first);
    assert!(binding.fixed_result().is_some_and(|r| !r.is_empty()));
    assert!(registry.find("missing").is_none());
}
