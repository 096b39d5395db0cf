//! Abstract value store for whole-program analysis of JavaScript.
//!
//! The analyzer approximates every runtime value an expression may hold by a
//! set of abstract values. This crate provides:
//!
//! - **Interned values**: `ValueId` handles with O(1) equality (constants,
//!   `undefined`/`null`, object references)
//! - **Value sets**: immutable, duplicate-free, union-only `ValueSet`
//! - **Object model**: property descriptors with authorship metadata,
//!   prototype linkage and array index slots, stored in a concurrent map
//! - **Chain walks**: bounded, cycle-safe walks along prototype links
//!
//! The store is the mutation authority for objects: builtin operations that
//! add properties go through `ValueStore::add_property`, never around it, so
//! the driver's incremental invalidation sees every change.
pub mod object;
pub mod store;
pub mod value;
pub mod value_set;
pub mod walk;

pub use object::{
    DefinitionSite, DescriptorFlags, FunctionKind, ObjectData, ObjectKind, PropertyChange,
    PropertyDescriptor, PropertyUpdate,
};
pub use store::ValueStore;
pub use value::{BuiltinRef, ObjectId, OrderedFloat, ValueData, ValueId};
pub use value_set::ValueSet;
pub use walk::{ChainWalk, WalkStop};
