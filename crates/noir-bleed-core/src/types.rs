//! # Domain Types
//!
//! Core domain types for the Noir Bleed cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │  ProductInput   │   │    CartItem     │   │  DisplayCount   │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id (opaque)    │──►│  id             │──►│  count (i64)    │    │
//! │  │  name           │   │  name (frozen)  │   │  visible (bool) │    │
//! │  │  price (Money)  │   │  price (frozen) │   └─────────────────┘    │
//! │  │  image          │   │  image (frozen) │                          │
//! │  └─────────────────┘   │  quantity ≥ 1   │                          │
//! │                        └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is an opaque string supplied by the storefront glue (derived there
//! from name+price). The cart never inspects it beyond equality, and ids are
//! unique within a cart.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product Input
// =============================================================================

/// A product descriptor handed to the cart by storefront glue.
///
/// How this is produced (scraping rendered markup, a catalog lookup, a test
/// literal) is entirely the caller's concern; the cart only requires a
/// well-formed shape. See [`crate::validation::validate_product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductInput {
    /// Stable unique identifier, opaque to the cart
    pub id: String,

    /// Display name (also carried on the "item added" notification)
    pub name: String,

    /// Unit price in cents; must not be negative
    pub price: Money,

    /// Arbitrary image reference (e.g., URL), carried through unchanged
    pub image: String,
}

// =============================================================================
// Cart Item
// =============================================================================

/// An item line in the shopping cart.
///
/// ## Design Notes
/// `name`, `price`, and `image` are frozen copies of the product data at the
/// time of first adding. Re-adding the same id only bumps the quantity; it
/// never refreshes the frozen fields, so the cart displays consistent data
/// even if the storefront renders a different price later.
///
/// The serialized shape is exactly the persisted record layout:
/// `{id, name, price, image, quantity}` with `price` in cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product ID (unique within a cart)
    pub id: String,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Unit price in cents at time of adding (frozen)
    pub price: Money,

    /// Image reference at time of adding (frozen)
    pub image: String,

    /// Quantity in cart; always ≥ 1 while the item exists
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart item from a product descriptor with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the storefront later shows a
    /// different price for the product, this cart line keeps the original.
    pub fn from_product(product: &ProductInput) -> Self {
        CartItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Display Count
// =============================================================================

/// The running item count published to the header badge.
///
/// ## Visibility Convention
/// The badge shows the numeric value only when there is something to show;
/// an empty cart hides the indicator entirely rather than rendering "0".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCount {
    /// Total quantity across all cart lines
    pub count: i64,

    /// Whether the badge should be shown at all (`count > 0`)
    pub visible: bool,
}

impl DisplayCount {
    /// Derives the badge state from a total quantity.
    pub fn from_total(count: i64) -> Self {
        DisplayCount {
            count,
            visible: count > 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product_starts_at_quantity_one() {
        let product = ProductInput {
            id: "noir-tee-999".to_string(),
            name: "Noir Tee".to_string(),
            price: Money::from_cents(999),
            image: "/img/noir-tee.jpg".to_string(),
        };

        let item = CartItem::from_product(&product);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, Money::from_cents(999));
        assert_eq!(item.line_total(), Money::from_cents(999));
    }

    #[test]
    fn test_display_count_visibility() {
        assert!(DisplayCount::from_total(1).visible);
        assert!(DisplayCount::from_total(42).visible);
        assert!(!DisplayCount::from_total(0).visible);
    }

    /// The serialized record layout is the on-disk cart format; field names
    /// and shapes here are a compatibility contract, not a convenience.
    #[test]
    fn test_cart_item_record_layout() {
        let item = CartItem {
            id: "noir-tee-999".to_string(),
            name: "Noir Tee".to_string(),
            price: Money::from_cents(999),
            image: "/img/noir-tee.jpg".to_string(),
            quantity: 2,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "noir-tee-999",
                "name": "Noir Tee",
                "price": 999,
                "image": "/img/noir-tee.jpg",
                "quantity": 2,
            })
        );
    }
}
