//! Opaque identities supplied by the surrounding analyzer.
//!
//! The builtin layer never looks inside a syntax tree or an analysis unit; it
//! only needs stable handles so that property definitions can be attributed
//! to the call expression and unit that produced them.

use serde::Serialize;
use std::fmt;

/// Identity of a syntax node (usually a call expression) in the parsed program.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no source node", used by builtin-internal definitions.
    pub const NONE: Self = Self(u32::MAX);

    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("node#none")
        } else {
            write!(f, "node#{}", self.0)
        }
    }
}

/// Identity of an analysis unit: the environment in which re-analysis and
/// value propagation are attributed (a function body, a module top level).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// The unit that owns builtin definitions created at namespace build time.
    pub const BUILTIN: Self = Self(0);

    pub const fn is_builtin(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}
