//! Builtin library semantics for the jsa analyzer.
//!
//! The analyzer evaluates JavaScript without running it, so every builtin the
//! analyzed code can reach needs a model. This crate provides that model:
//!
//! - **Bindings** (`binding`): stubs with a fixed result, specialized
//!   operations with per-call-site semantics, and data properties
//! - **Namespace construction** (`namespace`): binding lists turned into
//!   builtin objects and function objects in the value store
//! - **Dispatch** (`dispatch`): evaluating a call to a builtin, and the
//!   [`AnalysisHost`] seam through which builtins call back into the analyzer
//! - **Specialized operations** (`specialized`): `Array.prototype.forEach`,
//!   `Object.defineProperty`, `Object.defineProperties` and `require`
//! - **The global namespace** (`globals`): the assembled catalogue and the
//!   handles hosts wire into their environment
//! - **Signatures** (`signature`): label, documentation and parameter
//!   projection for editor features
//!
//! ```ignore
//! let store = ValueStore::new();
//! let globals = Globals::build(&store, &BuiltinOptions::default());
//!
//! let parse_int = globals.lookup(&store, "parseInt");
//! let mut cx = globals.call_context(&store, &mut host);
//! for callee in &parse_int {
//!     call_builtin(&mut cx, callee, &site);
//! }
//! ```

pub mod binding;
mod catalogue;
pub mod dispatch;
pub mod globals;
pub mod namespace;
pub mod options;
pub mod signature;
pub mod specialized;
pub mod tracing_config;

pub use binding::{Binding, BindingKind, BindingRegistry, CallSemantics, ParameterInfo};
pub use dispatch::{AnalysisHost, CallContext, CallOrigin, CallSite, call_builtin, dispatch};
pub use globals::Globals;
pub use namespace::NamespaceBuilder;
pub use options::BuiltinOptions;
pub use signature::{
    BindingSignature, ParameterSignature, SignatureKind, member_signatures, signature_for_member,
};

#[cfg(test)]
#[path = "../tests/test_host.rs"]
mod test_host;
