//! Benchmark for decoders: successful decodes of growing documents, and the
//! failure path where every element contributes an error.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use optica::decoder::{Decoder, array, boolean, draw, number, string, struct_};
use serde_json::{Value, json};
use std::hint::black_box;

fn user() -> Decoder<(String, f64, bool)> {
    struct_((("name", string()), ("age", number()), ("active", boolean())))
}

fn users(size: usize, valid: bool) -> Value {
    Value::Array(
        (0..size)
            .map(|index| {
                if valid {
                    let name = format!("user-{index}");
                    json!({ "name": name, "age": index, "active": index % 2 == 0 })
                } else {
                    json!({ "name": index, "age": "unknown", "active": null })
                }
            })
            .collect(),
    )
}

fn benchmark_decode_success(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("decode_success");
    let decoder = array(user());

    for size in [10, 100, 1000] {
        let input = users(size, true);
        group.bench_with_input(BenchmarkId::new("size", size), &input, |bencher, input| {
            bencher.iter(|| black_box(decoder.decode(input)));
        });
    }

    group.finish();
}

fn benchmark_decode_failure(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("decode_failure");
    let decoder = array(user());

    for size in [10, 100, 1000] {
        let input = users(size, false);
        group.bench_with_input(BenchmarkId::new("accumulate", size), &input, |bencher, input| {
            bencher.iter(|| black_box(decoder.decode(input)));
        });
    }

    // Rendering is done once per failure, after accumulation
    let input = users(100, false);
    if let Err(errors) = decoder.decode(&input) {
        group.bench_function("draw", |bencher| {
            bencher.iter(|| black_box(draw(&errors)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_decode_success, benchmark_decode_failure);

criterion_main!(benches);
