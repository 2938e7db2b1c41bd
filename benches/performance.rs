//! Performance benchmarks for the offer store.

use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use kiezsport::{
    MemorySink, OfferDraft, OfferFilter, OfferStore, Price, PriceRange, StoreConfig,
    TimeSlot, ValidationPolicy,
};
use std::sync::Arc;

fn draft(i: usize) -> OfferDraft {
    OfferDraft {
        title: format!("Angebot {i}"),
        provider: "Bench Provider".into(),
        image: String::new(),
        price: Price::from_eur((i % 60) as u32),
        period: "/Monat".into(),
        district: "Nordend".into(),
        rating: 4.5,
        duration: "60 Min".into(),
        category: "Laufen".into(),
        description: "Laufgruppe für alle Geschwindigkeiten.".into(),
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        current_participants: 0,
        max_participants: 20,
        location: "Stadtwald Frankfurt".into(),
        full_description: String::new(),
        content: String::new(),
        created_by: Some("bench".into()),
    }
}

fn store_with(size: usize) -> OfferStore {
    let store = OfferStore::with_config(
        StoreConfig {
            seed: Vec::new(),
            validation: ValidationPolicy::Permissive,
        },
        Arc::new(MemorySink::new()),
    );
    for i in 0..size {
        store.insert(draft(i)).unwrap();
    }
    store
}

/// Benchmark insert cost at varying store sizes.
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [18, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("store_size", size), &size, |b, &size| {
            b.iter_batched(
                || store_with(size),
                |store| store.insert(black_box(draft(size))).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark snapshot cost at varying store sizes.
fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in [18, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("store_size", size), &size, |b, &size| {
            let store = store_with(size);
            b.iter(|| black_box(store.all_offers()));
        });
    }

    group.finish();
}

/// Benchmark a full filter rescan at varying snapshot sizes.
fn bench_filter_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_scan");

    let filter = OfferFilter {
        term: Some("geschwindigkeiten".into()),
        categories: vec!["Laufen".into()],
        price: Some(PriceRange {
            min: Price::from_eur(10),
            max: Price::from_eur(40),
        }),
        time_slots: vec![TimeSlot::Evening],
        ..Default::default()
    };

    for size in [18, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("snapshot_size", size), &size, |b, &size| {
            let snapshot = store_with(size).all_offers();
            b.iter(|| black_box(filter.apply(&snapshot)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_snapshot, bench_filter_scan);
criterion_main!(benches);
