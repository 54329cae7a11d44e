//! # noir-bleed-core: Pure Cart Logic for the Noir Bleed Storefront
//!
//! This crate is the **heart** of the Noir Bleed cart. It contains all cart
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Noir Bleed Cart Architecture                     │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 Storefront UI glue (external)                 │ │
//! │  │   Product click ──► CartStore ──► Count badge / Toast         │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                noir-bleed-cart (CartStore layer)              │ │
//! │  │     key-value persistence, display sink, notification sink    │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │              ★ noir-bleed-core (THIS CRATE) ★                 │ │
//! │  │                                                               │ │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐ │ │
//! │  │   │   types   │  │   money   │  │   cart    │  │validation │ │ │
//! │  │   │ CartItem  │  │   Money   │  │   Cart    │  │   rules   │ │ │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘ │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO STORAGE • NO UI • PURE FUNCTIONS                │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductInput, CartItem, DisplayCount)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The Cart itself and its operations
//! - [`error`] - Validation error types
//! - [`validation`] - Product descriptor validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every cart operation is a total function - same
//!    input = same output, no partial states
//! 2. **No I/O**: Storage, network, UI access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use noir_bleed_core::cart::Cart;
//! use noir_bleed_core::money::Money;
//! use noir_bleed_core::types::ProductInput;
//!
//! let mut cart = Cart::new();
//! let shirt = ProductInput {
//!     id: "noir-tee-999".to_string(),
//!     name: "Noir Tee".to_string(),
//!     price: Money::from_cents(999), // $9.99 - never from floats!
//!     image: "/img/noir-tee.jpg".to_string(),
//! };
//!
//! cart.add_item(&shirt);
//! cart.add_item(&shirt); // same id: quantity bumps to 2
//!
//! assert_eq!(cart.total_price(), Money::from_cents(1998));
//! assert_eq!(cart.display_count().count, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use noir_bleed_core::Money` instead of
// `use noir_bleed_core::money::Money`

pub use cart::Cart;
pub use error::ValidationError;
pub use money::Money;
pub use types::{CartItem, DisplayCount, ProductInput};
