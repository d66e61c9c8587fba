//! Lookup benchmarks - the hot path.
//!
//! Measures: single-carrier longest-prefix resolution (hit and miss) and
//! the router's cross-carrier minimum scan at increasing carrier counts.

use tarifa::{Carrier, RateRouter, RateTable};

fn main() {
    divan::main();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Test fixtures
// ═══════════════════════════════════════════════════════════════════════════════

fn sample_carrier() -> Carrier {
    let mut carrier = Carrier::new("Operator A");
    carrier
        .bulk_insert_prefix_rates([
            ("1", 0.9),
            ("46", 0.17),
            ("468", 0.15),
            ("4620", 0.0),
            ("4631", 0.15),
            ("4673", 0.9),
            ("46732", 1.1),
            ("268", 5.1),
        ])
        .unwrap();
    carrier
}

fn router_with(carriers: usize) -> RateRouter {
    let mut router = RateRouter::new();
    router
        .bulk_register((0..carriers).map(|i| {
            (
                format!("Operator {i}"),
                vec![
                    ("46".to_string(), 0.2 + i as f64 / 1000.0),
                    ("4673".to_string(), 0.9 + i as f64 / 1000.0),
                ],
            )
        }))
        .unwrap();
    router
}

// ═══════════════════════════════════════════════════════════════════════════════
// Single carrier: longest-prefix resolution
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn carrier_lookup_hit(bencher: divan::Bencher) {
    let carrier = sample_carrier();

    bencher.bench_local(|| carrier.rate_for_number("4673212345"));
}

#[divan::bench]
fn carrier_lookup_miss(bencher: divan::Bencher) {
    let carrier = sample_carrier();

    bencher.bench_local(|| carrier.rate_for_number("9990001111"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Router: cross-carrier minimum scan
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench(args = [1, 100, 1000])]
fn router_find_cheapest(bencher: divan::Bencher, carriers: usize) {
    let router = router_with(carriers);

    bencher.bench_local(|| router.find_cheapest("4673212345"));
}
