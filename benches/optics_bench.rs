//! Benchmark for optics: composed lens access, traversal updates and the
//! cost of going through a composition versus direct field access.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use optica::lens;
use optica::optics::{Lens, LensCompose, Optional, OptionalCompose, Traversal, TraversalCompose};
use std::hint::black_box;

#[derive(Clone, Debug)]
struct Inventory {
    items: Vec<Item>,
}

#[derive(Clone, Debug)]
struct Item {
    name: String,
    stock: Stock,
}

#[derive(Clone, Debug)]
struct Stock {
    count: u64,
}

fn inventory(size: usize) -> Inventory {
    Inventory {
        items: (0..size)
            .map(|index| Item {
                name: format!("item-{index}"),
                stock: Stock { count: index as u64 },
            })
            .collect(),
    }
}

// =============================================================================
// Lens Benchmarks
// =============================================================================

fn benchmark_composed_lens(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composed_lens");
    let item = Item {
        name: "bolt".to_string(),
        stock: Stock { count: 3 },
    };
    let count = lens!(Item, stock).prop(lens!(Stock, count));

    group.bench_function("get", |bencher| {
        bencher.iter(|| black_box(count.get(black_box(&item))));
    });

    group.bench_function("modify", |bencher| {
        bencher.iter(|| black_box(count.modify(item.clone(), |count| count + 1)));
    });

    // Baseline
    group.bench_function("direct_modify", |bencher| {
        bencher.iter(|| {
            let mut item = item.clone();
            item.stock.count += 1;
            black_box(item)
        });
    });

    group.finish();
}

// =============================================================================
// Traversal Benchmarks
// =============================================================================

fn benchmark_each_modify(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("each_modify");
    let counts = lens!(Inventory, items).each().prop(lens!(Item, stock)).prop(lens!(Stock, count));

    for size in [10, 100, 1000] {
        let source = inventory(size);
        group.bench_with_input(BenchmarkId::new("size", size), &source, |bencher, source| {
            bencher.iter(|| black_box(counts.modify(source.clone(), |count: u64| count * 2)));
        });
    }

    group.finish();
}

fn benchmark_each_get_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("each_get_all");
    let names = lens!(Inventory, items).each().prop(lens!(Item, name));

    for size in [10, 100, 1000] {
        let source = inventory(size);
        group.bench_with_input(BenchmarkId::new("size", size), &source, |bencher, source| {
            bencher.iter(|| black_box(names.get_all(source)));
        });
    }

    group.finish();
}

fn benchmark_index_optional(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("index_optional");
    let source = inventory(1000);
    let last = lens!(Inventory, items).index(999).prop(lens!(Item, stock));

    group.bench_function("get_option", |bencher| {
        bencher.iter(|| black_box(last.get_option(&source)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_composed_lens,
    benchmark_each_modify,
    benchmark_each_get_all,
    benchmark_index_optional
);

criterion_main!(benches);
