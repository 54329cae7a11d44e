//! # Store Error Types
//!
//! Error types for storage backends and the CartStore.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  I/O error (std::io::Error) / bad JSON (serde_json::Error)          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StorageError (this module) ← what a backend reports                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← what CartStore callers see, alongside   │
//! │       │                     ValidationError from noir-bleed-core    │
//! │       ▼                                                             │
//! │  Storefront glue decides how to message the shopper                 │
//! │                                                                     │
//! │  Exception: during initialize(), storage errors do NOT propagate.   │
//! │  Unreadable or unparseable persisted state recovers to an empty     │
//! │  cart, reported through the recovery hook only.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use noir_bleed_core::ValidationError;
use thiserror::Error;

/// Key-value storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (missing directory, permissions, disk full).
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backend's own bookkeeping could not be parsed or written.
    ///
    /// This is about the backend's key-value map, not the cart payload;
    /// a malformed cart payload is a recovery case, not an error.
    #[error("storage data malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors surfaced to CartStore callers.
///
/// Mutations are recoverable: on a storage failure the in-memory cart is
/// rolled back to match the last successful write, so the caller may retry
/// or ignore without desynchronizing the displayed state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The product descriptor was malformed (empty id, negative price).
    #[error("invalid product: {0}")]
    Validation(#[from] ValidationError),

    /// The persistence write failed; the mutation was rolled back.
    #[error("cart not persisted: {0}")]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_to_store_error() {
        let err: StoreError = ValidationError::Required {
            field: "id".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(err.to_string(), "invalid product: id is required");
    }

    #[test]
    fn test_io_converts_to_storage_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err: StorageError = io.into();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
