//! Performance benchmarks for the bill splitter.
//!
//! Covers the pure split on its own and the full HTTP round trip:
//! - Split of a small dinner bill
//! - Scaling with the number of people and items
//! - POST /split through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use uuid::Uuid;

use bill_splitter::api::{AppState, create_router};
use bill_splitter::calculation::split_bill;
use bill_splitter::config::ConfigLoader;
use bill_splitter::models::{Item, ItemId, Person, PersonId};
use bill_splitter::store::InMemoryEventStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a bill where item `i` is shared by people `i % n` and `(i + 1) % n`.
fn create_bill(people_count: usize, item_count: usize) -> (Vec<Person>, Vec<Item>) {
    let people: Vec<Person> = (0..people_count)
        .map(|i| Person::new(PersonId(Uuid::from_u128(i as u128 + 1)), format!("Guest {}", i)))
        .collect();

    let items = (0..item_count)
        .map(|i| {
            let first = people[i % people_count].id;
            let second = people[(i + 1) % people_count].id;
            Item::new(
                ItemId(Uuid::from_u128(10_000 + i as u128)),
                format!("Dish {}", i),
                Decimal::new(1_250 + (i as i64 % 7) * 100, 2),
                1,
                [first, second],
            )
        })
        .collect();

    (people, items)
}

/// Benchmark: Four people, ten items.
fn bench_small_dinner(c: &mut Criterion) {
    let (people, items) = create_bill(4, 10);
    let tax = Decimal::new(8875, 3);
    let tip = Decimal::new(18, 0);

    c.bench_function("small_dinner", |b| {
        b.iter(|| black_box(split_bill(black_box(&people), black_box(&items), tax, tip)))
    });
}

/// Benchmark: Various bill sizes to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let tax = Decimal::new(8875, 3);
    let tip = Decimal::new(18, 0);

    let mut group = c.benchmark_group("scaling");

    for (people_count, item_count) in [(2, 5), (8, 40), (20, 200), (50, 1000)].iter() {
        let (people, items) = create_bill(*people_count, *item_count);

        group.throughput(Throughput::Elements(*item_count as u64));
        group.bench_with_input(
            BenchmarkId::new("people_items", format!("{}x{}", people_count, item_count)),
            &(people, items),
            |b, (people, items)| b.iter(|| black_box(split_bill(people, items, tax, tip))),
        );
    }

    group.finish();
}

/// Benchmark: POST /split through the router.
fn bench_split_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/splitter.yaml").expect("Failed to load config");
    let state = AppState::new(config, Arc::new(InMemoryEventStore::default()));
    let router = create_router(state);

    let (people, items) = create_bill(6, 20);
    let body = serde_json::json!({
        "people": people
            .iter()
            .map(|p| serde_json::json!({ "id": p.id, "name": p.name }))
            .collect::<Vec<_>>(),
        "items": items
            .iter()
            .map(|i| serde_json::json!({
                "id": i.id,
                "name": i.name,
                "unit_price": i.price,
                "shared_by": i.shared_by,
            }))
            .collect::<Vec<_>>(),
        "tax_rate": "8.875",
        "tip_rate": "18"
    })
    .to_string();

    c.bench_function("split_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/split")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_small_dinner,
    bench_scaling,
    bench_split_endpoint,
);
criterion_main!(benches);
