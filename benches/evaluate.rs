use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rolerule::{parse, RoleRule};

/// Build a rule requiring `n` roles joined by AND, with every other role
/// wrapped in an OR against a fallback, plus the matching role set.
fn build_rule(n: usize) -> (String, HashSet<String>) {
    let mut source = String::new();
    let mut granted = HashSet::new();

    for i in 0..n {
        if i > 0 {
            source.push_str(" AND ");
        }
        if i % 2 == 0 {
            source.push_str(&format!("r{i}"));
        } else {
            source.push_str(&format!("(r{i} OR NOT fallback{i})"));
        }
        granted.insert(format!("r{i}"));
    }

    (source, granted)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &n in &[5, 20, 50] {
        let (source, _) = build_rule(n);
        group.bench_function(&format!("{n}_roles"), |b| {
            b.iter(|| parse(black_box(&source)));
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_eval");

    for &n in &[5, 20, 50] {
        let (source, granted) = build_rule(n);
        let rule = RoleRule::parse(&source).unwrap();

        group.bench_function(&format!("{n}_roles_tree"), |b| {
            b.iter(|| rule.evaluate(black_box(&granted)));
        });

        let indexed = rule.roles_builder().grant_all(&granted).build();
        group.bench_function(&format!("{n}_roles_indexed"), |b| {
            b.iter(|| rule.evaluate_indexed(black_box(&indexed)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_evaluate);
criterion_main!(benches);
