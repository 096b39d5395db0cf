//! Centralized limits and thresholds for the builtin-semantics layer.
//!
//! Every bound the layer applies lives here, next to the shape of input it
//! guards against.
//!
//! # Categories
//!
//! - **Recursion Depths**: walks over object graphs built from user code
//! - **Slot Limits**: per-object bookkeeping sized by user code
//! - **Capacity Limits**: inline sizes and pre-allocation hints
//!
//! There is no limit on *nested calls* (a callback invoked from `forEach` that
//! itself calls `forEach`, ...). The analysis driver bounds call recursion.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum prototype chain length followed by member lookup.
///
/// Prototype chains are built from user code and may be cyclic or absurdly
/// long after widening:
///
/// ```javascript
/// function A() {}
/// A.prototype = Object.create(B.prototype);
/// B.prototype = Object.create(A.prototype); // cycle after merging
/// new A().missing;
/// ```
///
/// Lookup stops after this many hops and reports "nothing known".
pub const MAX_PROTOTYPE_CHAIN_DEPTH: usize = 64;

/// Number of array index slots tracked per array.
///
/// Slot numbers come from the analysis driver, which reads them off index
/// expressions in user code:
///
/// ```javascript
/// var a = [];
/// a[4294967294] = f;
/// ```
///
/// Writes at or past this slot are dropped instead of growing the slot list.
pub const MAX_TRACKED_INDEX_SLOTS: usize = 1 << 16;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity of a value set before it spills to the heap.
///
/// Most expressions hold one or two abstract values; sets of four or fewer
/// stay on the stack.
pub const VALUE_SET_INLINE: usize = 4;

/// Pre-allocation hint for the number of objects in a fresh value store.
///
/// The global catalogue alone allocates a few dozen namespace and function
/// objects.
pub const INITIAL_OBJECT_CAPACITY: usize = 256;
