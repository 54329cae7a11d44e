//! # Display and Notification Sinks
//!
//! The two outward-facing seams of the CartStore. In the storefront these
//! are a count badge in the page header and a transient "added to cart"
//! toast; here they are traits so the UI glue (or a test) decides the
//! presentation.
//!
//! Timing concerns (the toast's auto-dismiss) belong entirely to the
//! notifier implementation; the CartStore only emits the event.

use noir_bleed_core::DisplayCount;
use tracing::info;

/// Receives the running item count after every state change.
///
/// The convention is baked into [`DisplayCount`]: render the number when
/// `visible`, hide the indicator entirely otherwise (never show "0").
pub trait CountDisplay {
    /// Called once on initialize and after every operation that saves the
    /// cart (which for removes includes the missing-id case).
    fn publish(&mut self, count: DisplayCount);
}

/// Receives an "item added" event with the product's display name.
pub trait Notifier {
    /// Called after a successful `add_item`, with the display name from
    /// the descriptor that was just added.
    fn item_added(&mut self, name: &str);
}

// =============================================================================
// Log-Backed Implementations
// =============================================================================

/// Writes the badge state to the log. Used by the demo binary and handy as
/// a placeholder before real UI glue exists.
#[derive(Debug, Default)]
pub struct LogDisplay;

impl CountDisplay for LogDisplay {
    fn publish(&mut self, count: DisplayCount) {
        info!(count = count.count, visible = count.visible, "cart badge");
    }
}

/// Writes "added to cart" events to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn item_added(&mut self, name: &str) {
        info!(product = %name, "added to cart");
    }
}
