//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions and data structures used
//! throughout the crate: the flat N-D buffer carrier, the error taxonomy, and
//! the storage-overlap classification for in-place operations. It has zero
//! internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Ops
//!   ↓
//! Layer 3: Exec
//!   ↓
//! Layer 2: Scalar
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Flat N-dimensional buffer carrier.
pub mod buffer;

/// Storage-overlap classification for binary operations.
pub mod alias;
