//! Options for building the builtin namespace.
//!
//! Hosts usually keep these next to the rest of their analyzer settings and
//! hand them over as JSON, so unknown keys are ignored and every key is
//! optional.
//!
//! ```json
//! { "globalAliases": ["global"], "nodeRequire": true }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuiltinOptions {
    /// Names under which the global object refers to itself.
    pub global_aliases: Vec<String>,
    /// Bind `require` to module resolution through the host. When off,
    /// `require` is a plain stub.
    pub node_require: bool,
    /// Keep the catalogue's second `Infinity` entry, which rebinds
    /// `Infinity` to NaN. When off, that value is bound as `NaN` instead.
    pub legacy_infinity_override: bool,
}

impl Default for BuiltinOptions {
    fn default() -> Self {
        Self {
            global_aliases: vec!["GLOBAL".to_string(), "global".to_string(), "root".to_string()],
            node_require: true,
            legacy_infinity_override: true,
        }
    }
}

impl BuiltinOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
