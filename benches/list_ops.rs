use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use list_algos::{
    add_two_numbers, alternate_high_low, intersection_node, is_palindrome, ListArena, ListBuilder,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const LENS: &[usize] = &[1_000, 10_000, 100_000];

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..1_000)).collect()
}

fn bench_palindrome(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_palindrome");
    for &len in LENS {
        group.bench_function(format!("mirrored_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let half = random_values(&mut rng, len / 2);
                    let mut arena = ListArena::with_capacity(len);
                    let head = arena.push_list(half.iter().chain(half.iter().rev()).copied());
                    (arena, head)
                },
                |(mut arena, head)| criterion::black_box(is_palindrome(&mut arena, head)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_two_numbers");
    for &len in LENS {
        group.bench_function(format!("digits_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(7);
                    let mut arena = ListArena::with_capacity(3 * len);
                    let x = arena.push_list((0..len).map(|_| rng.gen_range(0u8..10)));
                    let y = arena.push_list((0..len / 2).map(|_| rng.gen_range(0u8..10)));
                    (arena, x, y)
                },
                |(mut arena, x, y)| criterion::black_box(add_two_numbers(&mut arena, x, y)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_zigzag(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternate_high_low");
    for &len in LENS {
        group.bench_function(format!("random_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(99);
                    let mut arena = ListArena::with_capacity(len);
                    let head = arena.push_list(random_values(&mut rng, len));
                    (arena, head)
                },
                |(mut arena, head)| criterion::black_box(alternate_high_low(&mut arena, head)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection_node");
    for &len in LENS {
        let mut arena = ListArena::with_capacity(2 * len);
        let shared = arena.push_list(0..len as u32 / 2);
        let a = ListBuilder::new(&mut arena)
            .with_values(0..len as u32 / 2)
            .with_tail(shared)
            .build();
        let b = ListBuilder::new(&mut arena)
            .with_values(0..len as u32 / 10)
            .with_tail(shared)
            .build();
        group.bench_function(format!("shared_tail_{len}"), |bench| {
            bench.iter(|| criterion::black_box(intersection_node(&arena, a, b)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_palindrome,
    bench_add,
    bench_zigzag,
    bench_intersection
);
criterion_main!(benches);
