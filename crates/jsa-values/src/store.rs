//! The value store: interned values plus the object table.
//!
//! `ValueStore` is shared by every analysis thread. Interned values sit behind
//! an `RwLock` (reads dominate once the catalogue is built); objects live in a
//! `DashMap`, whose per-entry locking serializes concurrent mutations of the
//! same object while leaving unrelated objects independent.
//!
//! ## Lock discipline
//!
//! No method holds one object's entry while taking another's. Operations that
//! read one object and write another (copying members, walking prototypes)
//! clone what they need, release, then write.

use crate::object::{
    DefinitionSite, FunctionKind, ObjectData, ObjectKind, PropertyChange, PropertyDescriptor,
    PropertyUpdate,
};
use crate::value::{ObjectId, OrderedFloat, ValueData, ValueId};
use crate::value_set::ValueSet;
use crate::walk::ChainWalk;
use dashmap::DashMap;
use jsa_common::limits::{INITIAL_OBJECT_CAPACITY, MAX_TRACKED_INDEX_SLOTS};
use jsa_common::{Atom, StringTable};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// Global counter for assigning unique instance IDs to `ValueStore` instances.
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Default)]
struct ValueTable {
    data: Vec<ValueData>,
    index: FxHashMap<ValueData, ValueId>,
}

/// Interned abstract values and the objects they reference.
pub struct ValueStore {
    /// Unique instance ID for debugging (tracks which store a trace line is from)
    instance_id: u64,
    strings: StringTable,
    values: RwLock<ValueTable>,
    objects: DashMap<ObjectId, ObjectData>,
    next_object: AtomicU32,
}

impl Default for ValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueStore {
    /// Create a store with the well-known values pre-registered.
    pub fn new() -> Self {
        let instance_id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::SeqCst);
        trace!(instance_id, "ValueStore::new - creating new instance");

        let strings = StringTable::new();
        strings.intern_common();

        let store = Self {
            instance_id,
            strings,
            values: RwLock::new(ValueTable::default()),
            objects: DashMap::with_capacity(INITIAL_OBJECT_CAPACITY),
            next_object: AtomicU32::new(ObjectId::FIRST_VALID),
        };

        // Order matters: these land on the fixed ids declared on `ValueId`.
        let well_known = [
            ValueData::Undefined,
            ValueData::Null,
            ValueData::Boolean(true),
            ValueData::Boolean(false),
            ValueData::String(Atom::NONE),
            ValueData::Number(OrderedFloat(0.0)),
            ValueData::AnyString,
            ValueData::AnyNumber,
            ValueData::AnyBoolean,
        ];
        for data in well_known {
            store.intern(data);
        }
        debug_assert_eq!(store.len(), ValueId::FIRST_USER as usize);
        store
    }

    // -------------------------------------------------------------------------
    // Strings
    // -------------------------------------------------------------------------

    pub fn intern_string(&self, s: &str) -> Atom {
        self.strings.intern(s)
    }

    pub fn resolve_atom(&self, atom: Atom) -> Arc<str> {
        self.strings.resolve(atom)
    }

    /// The atom for `s` if it has been interned already. Never inserts.
    pub fn lookup_string(&self, s: &str) -> Option<Atom> {
        self.strings.lookup(s)
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Intern a value and return its id. Equal data always yields the same id.
    pub fn intern(&self, data: ValueData) -> ValueId {
        {
            let table = self.values.read().expect("value table lock poisoned");
            if let Some(&id) = table.index.get(&data) {
                return id;
            }
        }

        let mut table = self.values.write().expect("value table lock poisoned");
        if let Some(&id) = table.index.get(&data) {
            return id;
        }
        let id = ValueId(table.data.len() as u32);
        table.data.push(data.clone());
        table.index.insert(data, id);
        id
    }

    /// Look up the data behind a value id.
    pub fn lookup(&self, id: ValueId) -> Option<ValueData> {
        let table = self.values.read().expect("value table lock poisoned");
        table.data.get(id.0 as usize).cloned()
    }

    /// Number of interned values.
    pub fn len(&self) -> usize {
        self.values.read().expect("value table lock poisoned").data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= ValueId::FIRST_USER as usize
    }

    pub fn string(&self, s: &str) -> ValueId {
        let atom = self.intern_string(s);
        self.intern(ValueData::String(atom))
    }

    pub fn number(&self, n: f64) -> ValueId {
        self.intern(ValueData::Number(OrderedFloat(n)))
    }

    pub fn boolean(&self, b: bool) -> ValueId {
        if b { ValueId::TRUE } else { ValueId::FALSE }
    }

    /// The string a value is statically known to be, or `None` for anything
    /// that is not a string constant. `ANY_STRING` is not a constant.
    pub fn constant_string(&self, id: ValueId) -> Option<Arc<str>> {
        self.constant_atom(id).map(|atom| self.resolve_atom(atom))
    }

    /// Like [`constant_string`](Self::constant_string) but without resolving
    /// the atom.
    pub fn constant_atom(&self, id: ValueId) -> Option<Atom> {
        match self.lookup(id)? {
            ValueData::String(atom) => Some(atom),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Objects
    // -------------------------------------------------------------------------

    /// Allocate a new object and return its id.
    pub fn alloc_object(&self, kind: ObjectKind, prototype: Option<ObjectId>) -> ObjectId {
        let id = ObjectId(self.next_object.fetch_add(1, Ordering::SeqCst));
        trace!(
            instance_id = self.instance_id,
            object = id.0,
            kind = ?kind,
            "ValueStore::alloc_object"
        );
        self.objects.insert(id, ObjectData::new(kind, prototype));
        id
    }

    /// The value that references `object`.
    pub fn object_value(&self, object: ObjectId) -> ValueId {
        self.intern(ValueData::Object(object))
    }

    /// Allocate a plain object and return the value referencing it.
    pub fn new_object(&self, prototype: Option<ObjectId>) -> ValueId {
        let id = self.alloc_object(ObjectKind::Plain, prototype);
        self.object_value(id)
    }

    /// Allocate an array whose index slots hold `index_types`.
    pub fn new_array(&self, prototype: Option<ObjectId>, index_types: Vec<ValueSet>) -> ValueId {
        let id = self.alloc_object(ObjectKind::Array { index_types }, prototype);
        self.object_value(id)
    }

    /// Allocate a function object standing for a function of the analyzed
    /// program.
    pub fn new_user_function(&self, function: u32, prototype: Option<ObjectId>) -> ValueId {
        let id = self.alloc_object(ObjectKind::Function(FunctionKind::User(function)), prototype);
        self.object_value(id)
    }

    /// The object a value refers to, if it is an object value.
    pub fn object_of(&self, value: ValueId) -> Option<ObjectId> {
        self.lookup(value)?.as_object()
    }

    /// The object a value refers to, if it is an array.
    pub fn array_of(&self, value: ValueId) -> Option<ObjectId> {
        let object = self.object_of(value)?;
        self.objects
            .get(&object)
            .filter(|data| data.is_array())
            .map(|_| object)
    }

    /// The object a value refers to, if analyzed code may add properties to it.
    pub fn expando_of(&self, value: ValueId) -> Option<ObjectId> {
        let object = self.object_of(value)?;
        self.objects
            .get(&object)
            .filter(|data| data.extensible)
            .map(|_| object)
    }

    /// What kind of function a value is, if it is a function object.
    pub fn function_kind(&self, value: ValueId) -> Option<FunctionKind> {
        let object = self.object_of(value)?;
        self.objects.get(&object).and_then(|data| data.function_kind())
    }

    /// Snapshot of an object's entry.
    pub fn object(&self, object: ObjectId) -> Option<ObjectData> {
        self.objects.get(&object).map(|r| r.clone())
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn prototype_of(&self, object: ObjectId) -> Option<ObjectId> {
        self.objects.get(&object).and_then(|r| r.prototype)
    }

    pub fn set_prototype(&self, object: ObjectId, prototype: Option<ObjectId>) {
        if let Some(mut entry) = self.objects.get_mut(&object) {
            entry.prototype = prototype;
        }
    }

    /// Refuse new properties from now on (`Object.preventExtensions`).
    /// Existing properties may still widen.
    pub fn prevent_extensions(&self, object: ObjectId) {
        if let Some(mut entry) = self.objects.get_mut(&object) {
            entry.extensible = false;
        }
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// Install a builtin descriptor, replacing any previous one with the same
    /// name. Only the catalogue builder uses this; analysis goes through
    /// [`add_property`](Self::add_property).
    pub fn define_builtin(
        &self,
        object: ObjectId,
        name: Atom,
        descriptor: PropertyDescriptor,
    ) -> Option<PropertyDescriptor> {
        let mut entry = self.objects.get_mut(&object)?;
        entry.properties.insert(name, descriptor)
    }

    /// Add (or widen) a property on behalf of analyzed code.
    ///
    /// Monotone: never removes a name and never shrinks a descriptor. On a
    /// non-extensible object, unknown names are refused.
    pub fn add_property(
        &self,
        site: DefinitionSite,
        object: ObjectId,
        name: Atom,
        update: &PropertyUpdate,
    ) -> PropertyChange {
        let Some(mut entry) = self.objects.get_mut(&object) else {
            return PropertyChange::Unchanged;
        };
        let extensible = entry.extensible;

        let change = match entry.properties.get_mut(&name) {
            Some(existing) => {
                if existing.merge(site, update) {
                    PropertyChange::Widened
                } else {
                    PropertyChange::Unchanged
                }
            }
            None if !extensible => PropertyChange::Unchanged,
            None => {
                let mut descriptor = PropertyDescriptor::data(ValueSet::empty());
                descriptor.merge(site, update);
                entry.properties.insert(name, descriptor);
                PropertyChange::Added
            }
        };

        trace!(
            instance_id = self.instance_id,
            object = object.0,
            name = name.0,
            node = %site.node,
            unit = %site.unit,
            change = ?change,
            "ValueStore::add_property"
        );
        change
    }

    /// The descriptor stored directly on `object`.
    pub fn own_descriptor(&self, object: ObjectId, name: Atom) -> Option<PropertyDescriptor> {
        self.objects
            .get(&object)
            .and_then(|r| r.properties.get(&name).cloned())
    }

    pub fn has_own_property(&self, object: ObjectId, name: Atom) -> bool {
        self.objects
            .get(&object)
            .is_some_and(|r| r.properties.contains_key(&name))
    }

    /// Find the descriptor for `name` on `object` or along its prototype chain.
    pub fn lookup_descriptor(&self, object: ObjectId, name: Atom) -> Option<PropertyDescriptor> {
        let mut walk = ChainWalk::prototype_chain();
        let mut current = Some(object);

        while let Some(id) = current {
            if let Err(stop) = walk.step(id) {
                trace!(object = id.0, hops = walk.len(), stop = ?stop, "prototype walk stopped");
                return None;
            }
            let (found, prototype) = self
                .objects
                .get(&id)
                .map(|r| (r.properties.get(&name).cloned(), r.prototype))?;
            if found.is_some() {
                return found;
            }
            current = prototype;
        }
        None
    }

    /// Values a member read `object.name` may produce (data half only;
    /// invoking getters is the driver's business).
    pub fn get_member(&self, object: ObjectId, name: Atom) -> ValueSet {
        self.lookup_descriptor(object, name)
            .map(|d| d.value)
            .unwrap_or_default()
    }

    /// Snapshot of the object's own `(name, descriptor)` pairs in insertion order.
    pub fn descriptors(&self, object: ObjectId) -> Vec<(Atom, PropertyDescriptor)> {
        self.objects
            .get(&object)
            .map(|r| {
                r.properties
                    .iter()
                    .map(|(name, desc)| (*name, desc.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The object's own property names in insertion order.
    pub fn property_names(&self, object: ObjectId) -> Vec<Atom> {
        self.objects
            .get(&object)
            .map(|r| r.properties.keys().copied().collect())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Array index slots
    // -------------------------------------------------------------------------

    /// Union `values` into index slot `slot` of an array, growing the slot
    /// list as needed. Returns `true` if the slot grew.
    ///
    /// Slots at or beyond [`MAX_TRACKED_INDEX_SLOTS`] are not tracked.
    pub fn add_index_type(&self, array: ObjectId, slot: usize, values: &ValueSet) -> bool {
        if slot >= MAX_TRACKED_INDEX_SLOTS {
            debug!(array = array.0, slot, "index slot beyond tracking limit");
            return false;
        }
        let Some(mut entry) = self.objects.get_mut(&array) else {
            return false;
        };
        let ObjectKind::Array { index_types } = &mut entry.kind else {
            return false;
        };
        if index_types.len() <= slot {
            index_types.resize(slot + 1, ValueSet::empty());
        }
        let widened = index_types[slot].union(values);
        if widened == index_types[slot] {
            return false;
        }
        index_types[slot] = widened;
        true
    }

    /// The tracked index slots of an array; empty for anything else.
    pub fn index_types(&self, array: ObjectId) -> Vec<ValueSet> {
        self.objects
            .get(&array)
            .and_then(|r| match &r.kind {
                ObjectKind::Array { index_types } => Some(index_types.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../tests/store_tests.rs"]
mod tests;
