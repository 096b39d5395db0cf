//! Property-bearing objects.
//!
//! An object maps property names to descriptors and may link to a prototype.
//! Arrays additionally track one value set per index slot the analysis has
//! observed. Descriptors remember *where* they were defined so that the
//! driver can re-analyze readers when a definition site changes.

use crate::value::{BuiltinRef, ObjectId};
use crate::value_set::ValueSet;
use indexmap::IndexMap;
use jsa_common::{Atom, NodeId, UnitId};
use smallvec::SmallVec;
use std::sync::Arc;

bitflags::bitflags! {
    /// Flags stored on a property descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DescriptorFlags: u8 {
        /// Installed by the builtin catalogue rather than by analyzed code.
        const BUILTIN    = 1 << 0;
        /// Builtin data member surfaced as a property (e.g. `Error.prototype.message`)
        /// rather than as a callable.
        const PROPERTY   = 1 << 1;
        /// Has a getter or a setter.
        const ACCESSOR   = 1 << 2;
        /// Shows up when the object's members are enumerated.
        const ENUMERABLE = 1 << 3;
    }
}

/// Where a property definition came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DefinitionSite {
    pub node: NodeId,
    pub unit: UnitId,
}

impl DefinitionSite {
    /// Definitions made while building the builtin namespace.
    pub const BUILTIN: Self = Self {
        node: NodeId::NONE,
        unit: UnitId::BUILTIN,
    };

    pub const fn new(node: NodeId, unit: UnitId) -> Self {
        Self { node, unit }
    }
}

/// Stored representation of one named property.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyDescriptor {
    /// Values the property may hold (data half).
    pub value: ValueSet,
    /// Getter functions (accessor half).
    pub getter: ValueSet,
    /// Setter functions (accessor half).
    pub setter: ValueSet,
    pub flags: DescriptorFlags,
    /// Developer-facing text for hover/signature help.
    pub documentation: Option<Arc<str>>,
    /// Every site that contributed to this descriptor.
    pub definitions: SmallVec<[DefinitionSite; 1]>,
}

impl PropertyDescriptor {
    /// Plain data descriptor holding `value`.
    pub fn data(value: ValueSet) -> Self {
        Self {
            value,
            flags: DescriptorFlags::ENUMERABLE,
            ..Self::default()
        }
    }

    /// Descriptor installed by the builtin catalogue.
    pub fn builtin(value: ValueSet, is_property: bool, documentation: Option<Arc<str>>) -> Self {
        let mut flags = DescriptorFlags::BUILTIN;
        if is_property {
            flags |= DescriptorFlags::PROPERTY;
        }
        Self {
            value,
            flags,
            documentation,
            definitions: SmallVec::from_elem(DefinitionSite::BUILTIN, 1),
            ..Self::default()
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.flags.contains(DescriptorFlags::BUILTIN)
    }

    pub fn is_property(&self) -> bool {
        self.flags.contains(DescriptorFlags::PROPERTY)
    }

    pub fn is_accessor(&self) -> bool {
        self.flags.contains(DescriptorFlags::ACCESSOR)
    }

    pub fn is_enumerable(&self) -> bool {
        self.flags.contains(DescriptorFlags::ENUMERABLE)
    }

    /// Fold `update` into this descriptor. Returns `true` if anything grew.
    pub(crate) fn merge(&mut self, site: DefinitionSite, update: &PropertyUpdate) -> bool {
        let mut changed = false;

        let value = self.value.union(&update.value);
        if value != self.value {
            self.value = value;
            changed = true;
        }
        let getter = self.getter.union(&update.getter);
        if getter != self.getter {
            self.getter = getter;
            changed = true;
        }
        let setter = self.setter.union(&update.setter);
        if setter != self.setter {
            self.setter = setter;
            changed = true;
        }
        if !(self.getter.is_empty() && self.setter.is_empty())
            && !self.flags.contains(DescriptorFlags::ACCESSOR)
        {
            self.flags |= DescriptorFlags::ACCESSOR;
            changed = true;
        }
        if !self.definitions.contains(&site) {
            self.definitions.push(site);
        }
        changed
    }
}

/// New information about a property, as produced by an assignment or a
/// `defineProperty`-style call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyUpdate {
    pub value: ValueSet,
    pub getter: ValueSet,
    pub setter: ValueSet,
}

impl PropertyUpdate {
    pub fn value(value: ValueSet) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

/// Outcome of adding a property, reported so the driver can schedule
/// dependents only when something actually changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertyChange {
    /// The name was not present before.
    Added,
    /// The name existed and its value, accessors or flags grew.
    Widened,
    /// Nothing new was learned (or the object refuses new properties).
    Unchanged,
}

impl PropertyChange {
    pub fn is_changed(self) -> bool {
        !matches!(self, PropertyChange::Unchanged)
    }
}

/// What a function object stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// Backed by a catalogue binding.
    Builtin(BuiltinRef),
    /// A function written in the analyzed program; the id is the driver's.
    User(u32),
}

/// Shape of an object.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    Plain,
    /// An array with one value set per tracked index slot.
    Array {
        index_types: Vec<ValueSet>,
    },
    Function(FunctionKind),
}

/// One entry of the object table.
#[derive(Clone, Debug)]
pub struct ObjectData {
    pub kind: ObjectKind,
    pub prototype: Option<ObjectId>,
    /// Whether analyzed code may add properties to this object.
    pub extensible: bool,
    pub properties: IndexMap<Atom, PropertyDescriptor>,
}

impl ObjectData {
    pub fn new(kind: ObjectKind, prototype: Option<ObjectId>) -> Self {
        Self {
            kind,
            prototype,
            extensible: true,
            properties: IndexMap::new(),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, ObjectKind::Array { .. })
    }

    pub fn function_kind(&self) -> Option<FunctionKind> {
        match self.kind {
            ObjectKind::Function(kind) => Some(kind),
            _ => None,
        }
    }
}
