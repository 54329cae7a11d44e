//! # noir-bleed-cart: CartStore and Persistence for the Noir Bleed Storefront
//!
//! This crate hosts the [`CartStore`]: the single object that owns the
//! authoritative in-memory cart, keeps it synchronized with a persistent
//! key-value store, and publishes the header badge count and "item added"
//! notifications through injected sinks.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      CartStore Data Flow                            │
//! │                                                                     │
//! │            ┌───────────────┐                                        │
//! │  add_item  │               │  set("noirBleedCart", json)            │
//! │  ────────► │   CartStore   │ ─────────────────────────► KV storage  │
//! │  update_   │               │                                        │
//! │  quantity  │  Cart (from   │  DisplayCount{count, visible}          │
//! │  ────────► │  noir-bleed-  │ ─────────────────────────► badge sink  │
//! │  remove_   │  core)        │                                        │
//! │  item      │               │  "Noir Tee"                            │
//! │  ────────► │               │ ─────────────────────────► notifier    │
//! │            └───────────────┘                                        │
//! │                                                                     │
//! │  Every mutation is read-modify-persist: the in-memory cart is       │
//! │  never ahead of the last successful write.                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The CartStore itself
//! - [`storage`] - `KeyValueStore` trait, memory and file backends
//! - [`sinks`] - Display-count and notification seams
//! - [`error`] - Storage and store error types

pub mod error;
pub mod sinks;
pub mod storage;
pub mod store;

pub use error::{StorageError, StoreError};
pub use sinks::{CountDisplay, Notifier};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{CartStore, RecoveryReason, CART_STORAGE_KEY};
