// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! Column/column and scalar/column evaluation throughput.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use colbinop::{BinaryOperator, Bitmask, Column, DataType, Scalar, evaluate};

const N: usize = 1_000_000;

fn make_i32(rng: &mut StdRng, with_nulls: bool) -> Column {
    let values: Vec<i32> = (0..N).map(|_| rng.gen_range(1..1_000)).collect();
    let col = Column::from_slice(&values);
    if with_nulls {
        let mask = Bitmask::from_bools((0..N).map(|_| rng.gen_bool(0.9)));
        col.with_null_mask(mask).unwrap()
    } else {
        col
    }
}

fn make_f64(rng: &mut StdRng) -> Column {
    let values: Vec<f64> = (0..N).map(|_| rng.gen_range(0.0..100.0)).collect();
    Column::from_slice(&values)
}

fn bench_binop(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xB1_0B);
    let a = make_i32(&mut rng, false);
    let b = make_i32(&mut rng, false);
    let a_nulls = make_i32(&mut rng, true);
    let b_nulls = make_i32(&mut rng, true);
    let x = make_f64(&mut rng);
    let y = make_f64(&mut rng);
    let scalar = Scalar::from(7i32);

    let mut group = c.benchmark_group("binop");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("add_i32_column_column", |bench| {
        bench.iter(|| black_box(evaluate(&a, &b, BinaryOperator::Add, DataType::Int32).unwrap()))
    });
    group.bench_function("add_i32_column_column_nulls", |bench| {
        bench.iter(|| {
            black_box(evaluate(&a_nulls, &b_nulls, BinaryOperator::Add, DataType::Int32).unwrap())
        })
    });
    group.bench_function("floor_div_i32_scalar_column", |bench| {
        bench.iter(|| {
            black_box(evaluate(&scalar, &a, BinaryOperator::FloorDiv, DataType::Int64).unwrap())
        })
    });
    group.bench_function("less_i32_f64_to_bool", |bench| {
        bench.iter(|| black_box(evaluate(&a, &x, BinaryOperator::Less, DataType::Boolean).unwrap()))
    });
    group.bench_function("pow_f64_column_column", |bench| {
        bench.iter(|| black_box(evaluate(&x, &y, BinaryOperator::Pow, DataType::Float64).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_binop);
criterion_main!(benches);
