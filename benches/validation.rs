//! Benchmarks for the settlecore validation hot path.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- submit_fill
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use settlecore::{
    AccountId, EmbeddedRecovery, Fill, FillContext, HashDomain, Order, OrderFlags,
    PositionSnapshot, SettlementEngine,
};

// ============================================================================
// HELPER FUNCTIONS - Deterministic fixture generation
// ============================================================================

const LIMIT_PRICE: u64 = 5_000_000_000_000;

fn venue() -> AccountId {
    AccountId::from_low_u64(1000)
}

fn new_engine() -> SettlementEngine<EmbeddedRecovery> {
    let domain = HashDomain::new("settlecore", "1", 1, venue());
    SettlementEngine::new(domain, EmbeddedRecovery, venue())
}

/// A buy order with a given salt; amount is effectively unbounded so
/// repeated unit fills never exhaust it.
fn make_order(salt: u64) -> Order {
    Order::new(
        OrderFlags::buy(),
        u64::MAX,
        LIMIT_PRICE,
        0,
        200_000,
        AccountId::from_low_u64(1),
        Some(AccountId::from_low_u64(2)),
        0,
        salt,
    )
}

fn make_context() -> FillContext {
    FillContext {
        caller: venue(),
        maker: AccountId::from_low_u64(1),
        taker: AccountId::from_low_u64(2),
        current_time: 1_700_000_000,
        reference_price: LIMIT_PRICE,
        maker_position: PositionSnapshot::flat(),
    }
}

// ============================================================================
// BENCHMARK: Single Fill Latency
// ============================================================================

fn bench_submit_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_fill");

    group.measurement_time(Duration::from_secs(10));

    // Benchmark: Repeated partial fills against one open order (the
    // signature is re-verified on every call)
    group.bench_function("open_order_partial_fill", |b| {
        let mut engine = new_engine();
        let order = make_order(1);
        let fill = Fill::new(100_000_000, LIMIT_PRICE, 200_000, false);
        let signature = EmbeddedRecovery::sign(AccountId::from_low_u64(1));
        let ctx = make_context();

        b.iter(|| black_box(engine.submit_fill(&order, &fill, Some(&signature), &ctx)));
    });

    // Benchmark: Fills against an approved order (status substitutes for
    // the signature)
    group.bench_function("approved_order_partial_fill", |b| {
        let mut engine = new_engine();
        let order = make_order(2);
        engine
            .approve(&order, AccountId::from_low_u64(1))
            .expect("approve fixture order");
        let fill = Fill::new(100_000_000, LIMIT_PRICE, 200_000, false);
        let ctx = make_context();

        b.iter(|| black_box(engine.submit_fill(&order, &fill, None, &ctx)));
    });

    // Benchmark: Rejection cost (price bound violated; no state touched)
    group.bench_function("rejected_fill", |b| {
        let mut engine = new_engine();
        let order = make_order(3);
        let fill = Fill::new(100_000_000, LIMIT_PRICE + 1, 200_000, false);
        let signature = EmbeddedRecovery::sign(AccountId::from_low_u64(1));
        let ctx = make_context();

        b.iter(|| black_box(engine.submit_fill(&order, &fill, Some(&signature), &ctx)));
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Canonical Hashing
// ============================================================================

fn bench_order_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_id");

    let engine = new_engine();
    let order = make_order(4);

    group.bench_function("canonical_hash", |b| {
        b.iter(|| black_box(engine.order_id(&order)));
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.measurement_time(Duration::from_secs(15));
    group.sample_size(50);

    for batch_size in [1_000usize, 10_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("distinct_orders", batch_size),
            &batch_size,
            |b, &size| {
                // Distinct salts produce distinct identities and ledger
                // entries, exercising the hashing and map paths together
                let orders: Vec<Order> = (0..size as u64).map(make_order).collect();
                let fill = Fill::new(100_000_000, LIMIT_PRICE, 200_000, false);
                let signature = EmbeddedRecovery::sign(AccountId::from_low_u64(1));
                let ctx = make_context();

                b.iter_batched(
                    new_engine,
                    |mut engine| {
                        for order in &orders {
                            black_box(engine.submit_fill(order, &fill, Some(&signature), &ctx))
                                .ok();
                        }
                        engine.ledger().len()
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_submit_fill, bench_order_id, bench_throughput);

criterion_main!(benches);
