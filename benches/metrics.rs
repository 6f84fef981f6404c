//! Benchmarks for performance metric recomputation

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prop_ledger::ledger::{ClosedTrade, Direction, OpenPosition, PerformanceMetrics, TradeOutcome};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn synthetic_history(len: usize) -> Vec<ClosedTrade> {
    (0..len)
        .map(|i| {
            // Deterministic mix of wins, losses, and breakevens
            let pnl = match i % 3 {
                0 => Decimal::from(50 + (i % 7) as i64),
                1 => -Decimal::from(40 + (i % 5) as i64),
                _ => dec!(0),
            };
            ClosedTrade {
                position: OpenPosition {
                    id: Uuid::new_v4(),
                    signal_id: Uuid::new_v4(),
                    pair: "EURUSD".to_string(),
                    direction: Direction::Long,
                    entry_price: dec!(1.0850),
                    size: dec!(10000),
                    entry_time: Utc::now(),
                    stop_loss: None,
                    take_profit: None,
                },
                outcome: TradeOutcome::ManualClose,
                pnl,
                close_time: Utc::now(),
            }
        })
        .collect()
}

fn benchmark_recompute_small(c: &mut Criterion) {
    let history = synthetic_history(50);

    c.bench_function("metrics_recompute_50", |b| {
        b.iter(|| PerformanceMetrics::compute(dec!(10000), black_box(&history)))
    });
}

fn benchmark_recompute_large(c: &mut Criterion) {
    let history = synthetic_history(5000);

    c.bench_function("metrics_recompute_5000", |b| {
        b.iter(|| PerformanceMetrics::compute(dec!(10000), black_box(&history)))
    });
}

criterion_group!(benches, benchmark_recompute_small, benchmark_recompute_large);
criterion_main!(benches);
