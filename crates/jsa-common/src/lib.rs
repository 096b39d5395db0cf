//! Common types and utilities shared by the jsa crates.
//!
//! This crate provides foundational types used across the analyzer layers:
//! - String interning (`Atom`, `StringTable`)
//! - Source identities for call sites and analysis units (`NodeId`, `UnitId`)
//! - Centralized limits and thresholds

// String interning for property names and string constants
pub mod interner;
pub use interner::{Atom, StringTable};

// Identities handed to us by the parser and the analysis driver
pub mod ids;
pub use ids::{NodeId, UnitId};

// Centralized limits and thresholds
pub mod limits;
