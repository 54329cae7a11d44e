//! # Error Types
//!
//! Validation error types for noir-bleed-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  noir-bleed-core errors (this file)                                 │
//! │  └── ValidationError  - Malformed product descriptors               │
//! │                                                                     │
//! │  noir-bleed-cart errors (separate crate)                            │
//! │  ├── StorageError     - Key-value store failures                    │
//! │  └── StoreError       - What CartStore callers see                  │
//! │                                                                     │
//! │  Flow: ValidationError → StoreError → UI glue                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT an error: removing or re-quantifying an id that is not
//! in the cart is a defined no-op, and corrupt persisted state recovers to
//! an empty cart. The only rejections the core hands out are for malformed
//! product descriptors.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when a product descriptor handed to the cart does not
/// meet requirements. The original storefront accepted any shape and could
/// silently corrupt the cart's keyed invariant; here a bad descriptor is
/// rejected up front.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A numeric field that must be zero or greater was negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }
}
