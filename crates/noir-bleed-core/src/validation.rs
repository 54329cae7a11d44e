//! # Validation Module
//!
//! Product descriptor validation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Storefront glue                                           │
//! │  ├── Builds the descriptor (markup scrape, catalog lookup, ...)     │
//! │  └── Whatever checks it cares to do                                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE, called by CartStore before any mutation      │
//! │  ├── id must be non-empty (the keyed invariant hangs off it)        │
//! │  └── price must not be negative                                     │
//! │                                                                     │
//! │  A descriptor with an empty id would silently corrupt the           │
//! │  unique-id invariant, so it is rejected up front instead.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use noir_bleed_core::money::Money;
//! use noir_bleed_core::types::ProductInput;
//! use noir_bleed_core::validation::validate_product;
//!
//! let product = ProductInput {
//!     id: "noir-tee-999".to_string(),
//!     name: "Noir Tee".to_string(),
//!     price: Money::from_cents(999),
//!     image: "/img/noir-tee.jpg".to_string(),
//! };
//! assert!(validate_product(&product).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductInput;

/// Validates a product descriptor before it touches the cart.
///
/// ## Rules
/// - `id` must be non-empty after trimming
/// - `price` must not be negative (zero is fine: promo items)
///
/// `name` and `image` are carried through unchanged and may be anything,
/// including empty.
pub fn validate_product(product: &ProductInput) -> ValidationResult<()> {
    validate_product_id(&product.id)?;

    if product.price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str, price_cents: i64) -> ProductInput {
        ProductInput {
            id: id.to_string(),
            name: "Noir Tee".to_string(),
            price: Money::from_cents(price_cents),
            image: String::new(),
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(validate_product(&product("noir-tee-999", 999)).is_ok());
        assert!(validate_product(&product("x", 0)).is_ok()); // free is fine
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = validate_product(&product("", 999)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "id".to_string()
            }
        );

        // Whitespace-only is empty too
        assert!(validate_product(&product("   ", 999)).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = validate_product(&product("a", -1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MustBeNonNegative {
                field: "price".to_string()
            }
        );
    }
}
