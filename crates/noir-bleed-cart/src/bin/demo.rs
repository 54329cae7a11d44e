//! # Cart Walkthrough
//!
//! Exercises the CartStore against a file-backed key-value store.
//!
//! ## Usage
//! ```bash
//! # Default storage file (./noir_bleed_cart.json)
//! cargo run -p noir-bleed-cart --bin demo
//!
//! # Custom storage file
//! cargo run -p noir-bleed-cart --bin demo -- --file ./tmp/cart.json
//! ```
//!
//! Run it twice: the second run initializes from the file the first run
//! wrote, so the cart picks up where it left off.

use std::env;

use noir_bleed_cart::sinks::{LogDisplay, LogNotifier};
use noir_bleed_cart::storage::FileStore;
use noir_bleed_cart::store::CartStore;
use noir_bleed_core::{Money, ProductInput};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut file = String::from("./noir_bleed_cart.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Noir Bleed Cart Walkthrough");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>  Storage file (default: ./noir_bleed_cart.json)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Noir Bleed Cart Walkthrough");
    println!("===========================");
    println!("Storage: {}", file);
    println!();

    let mut store = CartStore::new(FileStore::new(&file))
        .with_display(LogDisplay)
        .with_notifier(LogNotifier)
        .with_recovery_hook(|reason| {
            eprintln!("! persisted cart discarded: {:?}", reason);
        });

    store.initialize();
    println!("✓ Cart initialized ({} lines carried over)", store.items().len());
    println!();

    let catalog = [
        ProductInput {
            id: "noir-tee-999".to_string(),
            name: "Noir Tee".to_string(),
            price: Money::from_cents(999),
            image: "/img/noir-tee.jpg".to_string(),
        },
        ProductInput {
            id: "bleed-hoodie-4500".to_string(),
            name: "Bleed Hoodie".to_string(),
            price: Money::from_cents(4500),
            image: "/img/bleed-hoodie.jpg".to_string(),
        },
    ];

    // Two clicks on the tee, one on the hoodie
    store.add_item(&catalog[0])?;
    store.add_item(&catalog[0])?;
    store.add_item(&catalog[1])?;

    println!("Cart contents:");
    for item in store.items() {
        println!(
            "  {:<24} x{:<3} {:>8}",
            item.name,
            item.quantity,
            item.line_total().to_string()
        );
    }
    println!("  {:<28} {:>8}", "TOTAL", store.total_price().to_string());
    println!();

    let badge = store.display_count();
    println!("Badge: count={} visible={}", badge.count, badge.visible);
    println!();
    println!("✓ Done - state persisted to {}", file);

    Ok(())
}
