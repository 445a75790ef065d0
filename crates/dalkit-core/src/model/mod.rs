//! Runtime data model definitions.
//!
//! Field descriptors are built once at schema registration and shared
//! read-only by every write that touches them.
pub mod field;
