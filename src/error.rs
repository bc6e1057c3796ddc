//! Structured failures of the fallible heap operations.

use thiserror::Error;

/// Failure of a fallible heap operation.
///
/// The heap is left unmodified whenever an operation fails with this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
	/// The heap is empty, so there is no maximum to peek at or extract.
	#[error("heap underflow")]
	Underflow,
	/// The new key is smaller than the key it is meant to replace.
	#[error("new key is smaller than current key")]
	InvalidKeyUpdate,
}
