//! Signature and hover projection of builtin members.
//!
//! Editors show builtin documentation the same way they show user code: a
//! label such as `parseInt(s, radix?)` plus the binding's documentation and
//! a parameter list. Everything here is a read-only view of the catalogue;
//! nothing touches analysis state.

use crate::binding::{Binding, ParameterInfo};
use crate::globals::Globals;
use jsa_values::{FunctionKind, ObjectId, PropertyDescriptor, ValueStore};

/// Whether a member is surfaced as something to call or something to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SignatureKind {
    Function,
    Property,
}

/// One parameter of a builtin signature.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSignature {
    pub name: String,
    pub documentation: Option<String>,
    pub optional: bool,
}

impl From<&ParameterInfo> for ParameterSignature {
    fn from(param: &ParameterInfo) -> Self {
        Self {
            name: param.name.to_string(),
            documentation: param.documentation.as_deref().map(str::to_string),
            optional: param.optional,
        }
    }
}

/// Developer-facing description of one builtin member.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingSignature {
    pub name: String,
    pub kind: SignatureKind,
    pub documentation: Option<String>,
    pub parameters: Vec<ParameterSignature>,
}

impl BindingSignature {
    /// Signature of a callable binding.
    pub fn from_binding(binding: &Binding) -> Self {
        Self {
            name: binding.name.to_string(),
            kind: if binding.is_callable() {
                SignatureKind::Function
            } else {
                SignatureKind::Property
            },
            documentation: binding.documentation.as_deref().map(str::to_string),
            parameters: binding.parameters.iter().map(ParameterSignature::from).collect(),
        }
    }

    fn property(name: &str, descriptor: &PropertyDescriptor) -> Self {
        Self {
            name: name.to_string(),
            kind: SignatureKind::Property,
            documentation: descriptor.documentation.as_deref().map(str::to_string),
            parameters: Vec::new(),
        }
    }

    /// `name(a, b?)` for functions, `name` for properties.
    pub fn label(&self) -> String {
        match self.kind {
            SignatureKind::Property => self.name.clone(),
            SignatureKind::Function => {
                let params: Vec<String> = self
                    .parameters
                    .iter()
                    .map(|p| {
                        let optional = if p.optional { "?" } else { "" };
                        format!("{}{}", p.name, optional)
                    })
                    .collect();
                format!("{}({})", self.name, params.join(", "))
            }
        }
    }

    /// Label, documentation and parameter docs, separated by blank lines.
    pub fn hover_text(&self) -> String {
        let mut sections = vec![self.label()];
        if let Some(doc) = self.documentation.as_ref().filter(|d| !d.is_empty()) {
            sections.push(doc.clone());
        }

        let documented: Vec<&ParameterSignature> = self
            .parameters
            .iter()
            .filter(|p| p.documentation.is_some())
            .collect();
        if !documented.is_empty() {
            let mut lines = vec!["Parameters:".to_string()];
            for param in documented {
                let desc = param.documentation.as_deref().unwrap_or("");
                lines.push(format!("- `{}` {}", param.name, desc));
            }
            sections.push(lines.join("\n"));
        }
        sections.join("\n\n")
    }
}

/// Signature of the member `name` of `object`, looked up along the
/// prototype chain.
///
/// Returns `None` when the member does not exist or was not installed by the
/// builtin catalogue.
pub fn signature_for_member(
    globals: &Globals,
    store: &ValueStore,
    object: ObjectId,
    name: &str,
) -> Option<BindingSignature> {
    let atom = store.lookup_string(name)?;
    let descriptor = store.lookup_descriptor(object, atom)?;
    project(globals, store, name, &descriptor)
}

/// Signatures of every builtin member stored directly on `object`, in
/// insertion order.
pub fn member_signatures(
    globals: &Globals,
    store: &ValueStore,
    object: ObjectId,
) -> Vec<BindingSignature> {
    store
        .descriptors(object)
        .into_iter()
        .filter_map(|(name, descriptor)| {
            project(globals, store, &store.resolve_atom(name), &descriptor)
        })
        .collect()
}

fn project(
    globals: &Globals,
    store: &ValueStore,
    name: &str,
    descriptor: &PropertyDescriptor,
) -> Option<BindingSignature> {
    if !descriptor.is_builtin() {
        return None;
    }
    let binding = descriptor.value.iter().find_map(|value| {
        match store.function_kind(value)? {
            FunctionKind::Builtin(builtin) => globals.registry().get(builtin),
            FunctionKind::User(_) => None,
        }
    });
    Some(match binding {
        Some(binding) => {
            // Report under the member name; aliases may differ from the
            // binding's own name.
            let mut signature = BindingSignature::from_binding(binding);
            signature.name = name.to_string();
            signature
        }
        None => BindingSignature::property(name, descriptor),
    })
}

#[cfg(test)]
#[path = "../tests/signature_tests.rs"]
mod tests;
