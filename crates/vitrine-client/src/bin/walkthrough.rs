//! # Storefront Walkthrough
//!
//! Drives one complete purchase against the in-memory backend: browse,
//! fill the cart, play with selection, walk the checkout wizard, confirm
//! payment, read the order back.
//!
//! ## Usage
//! ```bash
//! cargo run -p vitrine-client --bin walkthrough
//!
//! # With command-level logs
//! RUST_LOG=debug cargo run -p vitrine-client --bin walkthrough
//! ```

use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use vitrine_client::{AuthContext, Storefront};
use vitrine_core::money::Money;
use vitrine_ports::{ChannelNotifier, InMemoryCatalog, InMemoryOrders};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,vitrine_client=debug")),
        )
        .with_target(false)
        .init();

    println!("Vitrine Storefront Walkthrough");
    println!("==============================");

    let auth = AuthContext::guest();
    println!("Guest session:    {}", auth.customer_id());
    println!("Cart storage key: {}", auth.storage_key());
    println!();

    let (notifier, mut toasts) = ChannelNotifier::new();
    let shop = Storefront::new(
        auth,
        Arc::new(InMemoryCatalog::with_demo_catalog()),
        Arc::new(InMemoryOrders::new()),
        Arc::new(notifier),
    );

    // Browse the grid
    let listing = shop.browse_products().await?;
    println!("Catalog ({} products):", listing.len());
    for product in &listing {
        println!(
            "  {:<30} {:>10}   stock {}",
            product.title,
            Money::from_cents(product.price_cents).to_string(),
            product.stock
        );
    }
    println!();

    // Fill the cart
    shop.add_to_cart("prod-1001", Some(2)).await?;
    let cart = shop.add_to_cart("prod-1002", Some(1)).await?;
    println!(
        "✓ Cart: {} lines, selected total {}",
        cart.totals.item_count, cart.totals.selected_total
    );

    // Toggle one line's checkbox and watch the total follow
    let hub_id = cart.items[1].id.clone();
    let cart = shop.set_item_selected(&hub_id, false);
    println!("  Hub deselected  → selected total {}", cart.totals.selected_total);
    let cart = shop.set_item_selected(&hub_id, true);
    println!("  Hub re-selected → selected total {}", cart.totals.selected_total);
    println!();

    // Walk the checkout wizard
    let checkout = shop.begin_checkout()?;
    println!(
        "✓ Checkout started: {} lines, total {}",
        checkout.items.len(),
        Money::from_cents(checkout.total_cents)
    );

    shop.checkout_next()?;
    shop.submit_shipping_address(&json!({
        "full_name": "Ada Lovelace",
        "phone": "+44 20 7946 0999",
        "line1": "12 Analytical Way",
        "line2": "Flat 4",
        "city": "London",
        "postal_code": "EC1A 1BB",
    }))?;
    println!("✓ Shipping address accepted");

    shop.checkout_next()?;
    let receipt = shop
        .confirm_payment(&json!({
            "card_number": "4242424242424242",
            "expiry": "12/29",
            "cvc": "123",
            "cardholder": "Ada Lovelace",
        }))
        .await?;
    println!("✓ Payment confirmed");
    println!("  Order {} placed at {}", receipt.order_number, receipt.placed_at);
    println!("  Charged {}", Money::from_cents(receipt.total_cents));
    println!();

    // Read it back
    let history = shop.order_history(None, None).await?;
    println!("✓ Order history: {} order(s)", history.len());
    for order in &history {
        println!(
            "  {}  {:?}  {} item(s)  {}",
            order.order_number,
            order.status,
            order.item_count,
            Money::from_cents(order.total_cents)
        );
    }
    println!();

    // Everything the shell's toast overlay would have rendered
    println!("Toasts:");
    while let Ok(toast) = toasts.try_recv() {
        println!("  [{:?}] {}", toast.level, toast.message);
    }

    println!();
    println!("✓ Walkthrough complete");
    Ok(())
}
