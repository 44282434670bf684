//! Error types for kernel operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions a kernel operation can report:
//! operand shape disagreements, missing buffer storage, and internal
//! computation faults.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected counts).
//! * **Local**: Every failure is reported to the immediate caller; there is no
//!   fatal/process-level failure path.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape mismatch**: Binary operations require equal operand element counts.
//! 2. **Null buffer**: An operand that must carry data has no storage at all.
//! 3. **Compute error**: An unexpected fault inside an operation (e.g., extent
//!    arithmetic overflow while sizing scratch storage).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * A failed call leaves outputs unspecified in content but never corrupts
//!   unrelated buffers.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Operand element counts differ where equality is required.
    ShapeMismatch {
        /// Element count the operation expected.
        expected: usize,
        /// Element count actually provided.
        got: usize,
    },

    /// A required buffer has no storage (zero elements where content is mandatory).
    NullBuffer {
        /// Name of the offending operand (e.g., "input", "kernel").
        operand: &'static str,
    },

    /// An unexpected fault during execution, with a descriptive message.
    ComputeError(String),
}

/// Result alias used by every fallible kernel operation.
pub type KernelResult<T> = core::result::Result<T, KernelError>;

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "Shape mismatch: expected {expected} elements, got {got}")
            }
            Self::NullBuffer { operand } => {
                write!(f, "Buffer '{operand}' has no storage")
            }
            Self::ComputeError(msg) => write!(f, "Compute error: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KernelError {}
