//! String interner for property names and string constants.
//!
//! Builtin catalogues and analyzed programs mention the same handful of names
//! (`prototype`, `length`, `toString`, ...) over and over. Interning them into
//! a shared table lets the value store pass around `u32` handles (`Atom`s) and
//! compare names with integer equality.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `StringTable::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// The empty string. Always interned at index 0.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Names every builtin catalogue touches; interned up front so that the
/// catalogue build mostly hits the read path.
const COMMON_STRINGS: &[&str] = &[
    // Object model
    "prototype",
    "constructor",
    "length",
    "name",
    "value",
    "get",
    "set",
    "writable",
    "enumerable",
    "configurable",
    "arguments",
    "caller",
    // Global namespace
    "undefined",
    "Infinity",
    "NaN",
    "GLOBAL",
    "global",
    "root",
    "require",
    "Array",
    "Boolean",
    "Date",
    "Error",
    "Function",
    "JSON",
    "Math",
    "Number",
    "Object",
    "RegExp",
    "String",
    // Frequent prototype members
    "toString",
    "valueOf",
    "toLocaleString",
    "forEach",
    "defineProperty",
    "defineProperties",
    "apply",
    "bind",
    "call",
];

/// Concurrent string table.
///
/// Atoms are dense indices into `strings`; `atoms` maps text back to its
/// atom. Interning takes the map entry first and the `strings` lock second;
/// nothing takes them in the other order.
pub struct StringTable {
    atoms: DashMap<Arc<str>, Atom, FxBuildHasher>,
    strings: RwLock<Vec<Arc<str>>>,
}

impl StringTable {
    /// A table holding only the empty string, at `Atom::NONE`.
    pub fn new() -> Self {
        let empty: Arc<str> = Arc::from("");
        let atoms = DashMap::with_hasher(FxBuildHasher);
        atoms.insert(empty.clone(), Atom::NONE);
        Self {
            atoms,
            strings: RwLock::new(vec![empty]),
        }
    }

    /// The atom for `s`, interning it on first sight.
    pub fn intern(&self, s: &str) -> Atom {
        if let Some(atom) = self.atoms.get(s) {
            return *atom;
        }
        match self.atoms.entry(Arc::from(s)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let mut strings = self.strings.write().expect("string table lock poisoned");
                let atom = Atom(strings.len() as u32);
                strings.push(entry.key().clone());
                entry.insert(atom);
                atom
            }
        }
    }

    /// The text of `atom`; empty for atoms this table never produced.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        self.try_resolve(atom).unwrap_or_else(|| Arc::from(""))
    }

    pub fn try_resolve(&self, atom: Atom) -> Option<Arc<str>> {
        let strings = self.strings.read().expect("string table lock poisoned");
        strings.get(atom.0 as usize).cloned()
    }

    /// The atom for `s` if it has been interned. Never inserts.
    pub fn lookup(&self, s: &str) -> Option<Atom> {
        self.atoms.get(s).map(|atom| *atom)
    }

    /// Number of interned strings, the empty string included.
    pub fn len(&self) -> usize {
        self.strings.read().expect("string table lock poisoned").len()
    }

    /// `true` while only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    pub fn intern_common(&self) {
        for s in COMMON_STRINGS {
            self.intern(s);
        }
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;
