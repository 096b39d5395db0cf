//! Immutable sets of abstract values.
//!
//! A `ValueSet` is the analyzer's answer to "what might this expression hold
//! here?". Sets only ever grow by union: an operation that learns more builds
//! a new set and leaves the old one valid for every other consumer, which is
//! what keeps the surrounding fixed-point analysis monotone.

use crate::value::ValueId;
use jsa_common::limits::VALUE_SET_INLINE;
use smallvec::SmallVec;

/// Duplicate-free collection of abstract values.
///
/// Members are kept sorted by id so that equality, hashing and union are
/// linear; no ordering is promised to callers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueSet {
    values: SmallVec<[ValueId; VALUE_SET_INLINE]>,
}

impl ValueSet {
    /// The empty set: "nothing is statically known".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn singleton(value: ValueId) -> Self {
        let mut values = SmallVec::new();
        values.push(value);
        Self { values }
    }

    /// `{undefined}`, the result of a function with no meaningful return.
    pub fn undefined() -> Self {
        Self::singleton(ValueId::UNDEFINED)
    }

    /// Build a set from arbitrary ids, dropping duplicates.
    pub fn from_values(values: impl IntoIterator<Item = ValueId>) -> Self {
        let mut values: SmallVec<[ValueId; VALUE_SET_INLINE]> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Union of two sets. Neither operand is modified.
    pub fn union(&self, other: &ValueSet) -> ValueSet {
        if other.values.is_empty() || self.values == other.values {
            return self.clone();
        }
        if self.values.is_empty() {
            return other.clone();
        }

        let mut merged = SmallVec::with_capacity(self.values.len() + other.values.len());
        let (mut i, mut j) = (0, 0);
        while i < self.values.len() && j < other.values.len() {
            let (a, b) = (self.values[i], other.values[j]);
            if a < b {
                merged.push(a);
                i += 1;
            } else if b < a {
                merged.push(b);
                j += 1;
            } else {
                merged.push(a);
                i += 1;
                j += 1;
            }
        }
        merged.extend_from_slice(&self.values[i..]);
        merged.extend_from_slice(&other.values[j..]);
        ValueSet { values: merged }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn contains(&self, value: ValueId) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Check whether every member of `other` is also in `self`.
    pub fn is_superset_of(&self, other: &ValueSet) -> bool {
        other.values.iter().all(|v| self.contains(*v))
    }

    pub fn iter(&self) -> impl Iterator<Item = ValueId> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[ValueId] {
        &self.values
    }
}

impl From<ValueId> for ValueSet {
    fn from(value: ValueId) -> Self {
        Self::singleton(value)
    }
}

impl FromIterator<ValueId> for ValueSet {
    fn from_iter<I: IntoIterator<Item = ValueId>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = ValueId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ValueId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}

#[cfg(test)]
#[path = "../tests/value_set_tests.rs"]
mod tests;
