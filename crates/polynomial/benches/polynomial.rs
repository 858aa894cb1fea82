// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rpoly_polynomial::{nullable, Polynomial};

fn create_test_polynomials(degree: usize) -> (Polynomial, Polynomial) {
    let mut coeffs1 = Vec::new();
    let mut coeffs2 = Vec::new();

    for i in 0..=degree {
        coeffs1.push(i as f64 + 1.0);
        coeffs2.push((i + 1) as f64 * 2.5);
    }

    (
        Polynomial::new(&coeffs1).unwrap(),
        Polynomial::new(&coeffs2).unwrap(),
    )
}

fn benchmark_polynomial_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_addition");

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.add(&poly2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_multiplication");

    for degree in [5, 10, 20, 50] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.multiply(&poly2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_evaluation");

    for degree in [10, 50, 100, 500] {
        let (poly1, _) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.evaluate(black_box(0.5))))
        });
    }

    group.finish();
}

fn benchmark_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality");

    for degree in [10, 100, 1000] {
        let (poly1, _) = create_test_polynomials(degree);
        let poly2 = poly1.add_scalar(0.00001);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(nullable::equals(Some(&poly1), Some(&poly2))))
        });
    }

    group.finish();
}

fn benchmark_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    for degree in [10, 100, 500] {
        let (poly, _) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly.to_string()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_polynomial_addition,
    benchmark_polynomial_multiplication,
    benchmark_polynomial_evaluation,
    benchmark_equality,
    benchmark_rendering
);
criterion_main!(benches);
