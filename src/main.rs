//! settlecore - Binary Entry Point
//!
//! Walks one order through its full life: hash, sign, fill, settle,
//! cancel. Serves as a smoke test that the engine wires together.

use settlecore::types::price::{from_fixed, to_fixed};
use settlecore::{
    AccountId, EmbeddedRecovery, Fill, FillContext, HashDomain, Order, OrderFlags,
    PositionSnapshot, SettlementEngine,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("===========================================");
    println!("  settlecore - P2P Settlement Core");
    println!("===========================================");
    println!();

    let venue = AccountId::from_low_u64(1000);
    let maker = AccountId::from_low_u64(1);
    let taker = AccountId::from_low_u64(2);

    let domain = HashDomain::new("settlecore", "1", 1, venue);
    let mut engine = SettlementEngine::new(domain, EmbeddedRecovery, venue);

    println!("Creating sample order...");
    let limit_price = to_fixed("987.65432").unwrap_or(0);
    let limit_fee = to_fixed("0.0020").unwrap_or(0);
    let order = Order::new(
        OrderFlags::buy(),
        to_fixed("10000").unwrap_or(0), // amount: 10000 units
        limit_price,
        0,          // no trigger
        limit_fee,
        maker,
        Some(taker),
        4_800_000_000, // far-future expiration
        1,
    );

    let order_id = engine.order_id(&order);
    println!("Order created:");
    println!("  Canonical id: {}", order_id);
    println!("  Side: {}", if order.is_buy() { "buy" } else { "sell" });
    println!("  Amount: {}", from_fixed(order.amount));
    println!("  Limit price: {}", from_fixed(order.limit_price));
    println!("  Limit fee: {}", from_fixed(order.limit_fee));
    println!();

    println!("Submitting a full fill at the limit...");
    let fill = Fill::new(order.amount, limit_price, limit_fee, false);
    let signature = EmbeddedRecovery::sign(maker);
    let ctx = FillContext {
        caller: venue,
        maker,
        taker,
        current_time: 1_700_000_000,
        reference_price: limit_price,
        maker_position: PositionSnapshot::flat(),
    };

    match engine.submit_fill(&order, &fill, Some(&signature), &ctx) {
        Ok(result) => {
            println!("Fill accepted:");
            println!("  Margin amount (raw): {}", result.margin_amount);
            println!("  Position amount: {}", from_fixed(result.position_amount));
            println!(
                "  Counterparty side: {}",
                if result.is_buy { "buy" } else { "sell" }
            );
        }
        Err(e) => {
            println!("  ERROR: fill rejected: {}", e);
        }
    }
    println!();

    println!("Canceling the order and retrying the fill...");
    match engine.cancel(&order, maker) {
        Ok(()) => println!("  Order canceled."),
        Err(e) => println!("  ERROR: cancel rejected: {}", e),
    }
    match engine.submit_fill(&order, &fill, Some(&signature), &ctx) {
        Ok(_) => println!("  ERROR: fill unexpectedly accepted"),
        Err(e) => println!("  Fill rejected as expected: {}", e),
    }
    println!();

    println!("Events emitted: {}", engine.drain_events().len());
    println!("Run 'cargo test' to verify all tests pass.");
}
