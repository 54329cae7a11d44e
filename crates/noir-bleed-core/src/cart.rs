//! # Cart
//!
//! The shopping cart and its operations, as pure data manipulation.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Storefront Action        CartStore call         Cart change        │
//! │  ─────────────────        ──────────────         ───────────        │
//! │                                                                     │
//! │  Click Product ─────────► add_item() ──────────► push / qty += 1    │
//! │                                                                     │
//! │  Change Quantity ───────► update_quantity() ───► qty = n (or drop)  │
//! │                                                                     │
//! │  Click Remove ──────────► remove_item() ───────► retain(≠ id)       │
//! │                                                                     │
//! │  Click Clear ───────────► clear() ─────────────► items.clear()      │
//! │                                                                     │
//! │  Every operation is a total function: missing ids are no-ops,       │
//! │  never errors, and there are no partial states to unwind.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartItem, DisplayCount, ProductInput};

/// The shopping cart: an ordered sequence of items, keyed by product id.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product bumps its quantity)
/// - Quantity is always ≥ 1 (setting quantity ≤ 0 removes the item)
/// - Insertion order is display order and survives serialization
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Creates a cart from an already-validated item sequence.
    ///
    /// Used by the store layer when rehydrating persisted state.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Adds a product to the cart, or bumps its quantity if already present.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity += 1; the frozen name, price,
    ///   and image of the existing line are NOT touched (first-seen wins)
    /// - Product not in cart: appended with quantity 1
    ///
    /// Always succeeds for a well-formed product; descriptor validation
    /// happens before this call (see [`crate::validation`]).
    pub fn add_item(&mut self, product: &ProductInput) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem::from_product(product));
    }

    /// Removes an item by product id.
    ///
    /// ## Returns
    /// `true` if an item was removed, `false` if the id was not in the cart
    /// (a no-op, not an error).
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != product_id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of an item in the cart.
    ///
    /// ## Behavior
    /// - Id not in cart: no-op
    /// - `quantity <= 0`: removes the item (an item with non-positive
    ///   quantity must not exist)
    /// - Otherwise: sets the quantity to exactly `quantity`, no clamping
    ///
    /// ## Returns
    /// `true` if the cart changed.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            // remove_item already reports false for a missing id
            return self.remove_item(product_id);
        }

        match self.items.iter_mut().find(|i| i.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the items in display order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of distinct item lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the total price (Σ unit price × quantity).
    ///
    /// Pure query; returns zero for an empty cart. Exact integer summation,
    /// no rounding.
    pub fn total_price(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |sum, i| sum + i.line_total())
    }

    /// Derives the header badge state from the current contents.
    pub fn display_count(&self) -> DisplayCount {
        DisplayCount::from_total(self.total_quantity())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> ProductInput {
        ProductInput {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            image: format!("/img/{}.jpg", id),
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 999));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price(), Money::from_cents(999));
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product("a", 999);

        cart.add_item(&product);
        cart.add_item(&product);
        cart.add_item(&product);

        assert_eq!(cart.item_count(), 1); // Still one line
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_distinct_ids_make_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 100));
        cart.add_item(&test_product("b", 200));
        cart.add_item(&test_product("a", 100));
        cart.add_item(&test_product("c", 300));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.items()[0].id, "a"); // Insertion order preserved
        assert_eq!(cart.items()[1].id, "b");
        assert_eq!(cart.items()[2].id, "c");
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_re_add_never_refreshes_frozen_fields() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 999));

        // Same id, different everything else: first-seen values win
        let changed = ProductInput {
            id: "a".to_string(),
            name: "Renamed".to_string(),
            price: Money::from_cents(1),
            image: "/img/other.jpg".to_string(),
        };
        cart.add_item(&changed);

        let item = &cart.items()[0];
        assert_eq!(item.quantity, 2);
        assert_eq!(item.name, "Product a");
        assert_eq!(item.price, Money::from_cents(999));
        assert_eq!(item.image, "/img/a.jpg");
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 100));

        assert!(cart.remove_item("a"));
        assert!(!cart.remove_item("a")); // Second remove is a no-op
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 100));

        assert!(cart.update_quantity("a", 7));
        assert_eq!(cart.items()[0].quantity, 7);

        // No clamping, however large
        assert!(cart.update_quantity("a", 100_000));
        assert_eq!(cart.items()[0].quantity, 100_000);
    }

    #[test]
    fn test_update_quantity_nonpositive_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 100));
        assert!(cart.update_quantity("a", 0));
        assert!(cart.is_empty());

        cart.add_item(&test_product("a", 100));
        assert!(cart.update_quantity("a", -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 100));

        assert!(!cart.update_quantity("ghost", 5));
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_total_price() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_price(), Money::zero());

        // [{price: $10, qty: 2}, {price: $5, qty: 1}] → $25
        cart.add_item(&test_product("a", 1000));
        cart.update_quantity("a", 2);
        cart.add_item(&test_product("b", 500));

        assert_eq!(cart.total_price(), Money::from_cents(2500));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 100));
        cart.add_item(&test_product("b", 200));

        cart.clear();
        assert!(cart.is_empty());
        let badge = cart.display_count();
        assert_eq!(badge.count, 0);
        assert!(!badge.visible);
    }

    /// Adding the same $9.99 shirt twice, end to end on the pure cart.
    #[test]
    fn test_double_add_scenario() {
        let mut cart = Cart::new();
        let shirt = test_product("a", 999);

        cart.add_item(&shirt);
        cart.add_item(&shirt);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total_price(), Money::from_cents(1998));

        let badge = cart.display_count();
        assert_eq!(badge.count, 2);
        assert!(badge.visible);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 999));

        let value = serde_json::to_value(&cart).unwrap();
        assert!(value.is_array());

        let back: Cart = serde_json::from_value(value).unwrap();
        assert_eq!(back, cart);
    }
}
