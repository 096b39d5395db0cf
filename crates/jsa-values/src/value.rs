//! Abstract value identities.
//!
//! Every abstract value is interned once in the [`ValueStore`](crate::ValueStore)
//! and referred to by a `ValueId`. Two expressions hold "the same" abstract
//! value exactly when their ids are equal; membership in a [`ValueSet`](crate::ValueSet)
//! is by identity, never by structural comparison of runtime values.

use jsa_common::Atom;
use std::hash::{Hash, Hasher};

// =============================================================================
// ValueId
// =============================================================================

/// Handle to an interned abstract value.
///
/// A handful of values every analysis needs are pre-registered at fixed ids
/// so catalogue code can name them without a store lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId(pub u32);

impl ValueId {
    /// The `undefined` value.
    pub const UNDEFINED: Self = Self(0);
    /// The `null` value.
    pub const NULL: Self = Self(1);
    /// The constant `true`.
    pub const TRUE: Self = Self(2);
    /// The constant `false`.
    pub const FALSE: Self = Self(3);
    /// The constant `""`.
    pub const EMPTY_STRING: Self = Self(4);
    /// The constant `0`.
    pub const ZERO: Self = Self(5);
    /// Some string whose contents are not known.
    pub const ANY_STRING: Self = Self(6);
    /// Some number whose value is not known.
    pub const ANY_NUMBER: Self = Self(7);
    /// Some boolean whose value is not known.
    pub const ANY_BOOLEAN: Self = Self(8);

    /// First id handed out for values interned at runtime.
    pub const FIRST_USER: u32 = 9;

    /// Check if this is one of the pre-registered values.
    pub const fn is_well_known(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

// =============================================================================
// ObjectId / BuiltinRef
// =============================================================================

/// Identity of an object in the store's object table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// First id handed out by the object table. Id 0 is never allocated.
    pub const FIRST_VALID: u32 = 1;
}

/// Index of a builtin binding in the catalogue's binding registry.
///
/// The value store only records *that* a function object is builtin and which
/// binding backs it; the binding itself (and its call semantics) lives with
/// the catalogue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuiltinRef(pub u32);

// =============================================================================
// ValueData
// =============================================================================

/// `f64` wrapper with total equality and hashing, so numeric constants can be
/// interned. All NaN payloads are treated as one value and `-0.0` is kept
/// distinct from `0.0`.
#[derive(Copy, Clone, Debug)]
pub struct OrderedFloat(pub f64);

impl OrderedFloat {
    fn canonical_bits(self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for OrderedFloat {}

impl Hash for OrderedFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

/// The structure behind a `ValueId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueData {
    Undefined,
    Null,
    Boolean(bool),
    Number(OrderedFloat),
    /// A string constant.
    String(Atom),
    /// A string, number or boolean known only by its type. These never fold
    /// to a constant.
    AnyString,
    AnyNumber,
    AnyBoolean,
    /// A reference to an object in the object table (plain objects, arrays
    /// and functions alike).
    Object(ObjectId),
}

impl ValueData {
    /// Object referenced by this value, if any.
    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            ValueData::Object(id) => Some(*id),
            _ => None,
        }
    }
}
