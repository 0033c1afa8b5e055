use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use godecl::{go_to_english, EXAMPLES};
use godecl_parser::lexer::Lexer;
use std::hint::black_box as bb;

// =============================================================================
// Fragments, one per category plus the all-categories failure
// =============================================================================

const FRAGMENTS: &[(&str, &str)] = &[
    ("expr", "**[][]*map[int32][][3]string"),
    ("decl", "var (x, y int; a, b string)"),
    ("func", "func Foo(x int, f func(string, bool) (int, error)) string { return \"\" }"),
    ("stmt", "x, y := (2+5)/3.0+4, []int{1, 2}"),
    ("error", "var x int ) ("),
];

// =============================================================================
// Benchmark 1: Lexer over each fragment
// =============================================================================

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    for &(name, input) in FRAGMENTS {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("iterate", name), &input, |b, &input| {
            b.iter(|| bb(Lexer::new(bb(input)).count()));
        });
    }
    group.finish();
}

// =============================================================================
// Benchmark 2: Full cascade (parse attempts + rendering)
// =============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("go_to_english");
    for &(name, input) in FRAGMENTS {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("render", name), &input, |b, &input| {
            b.iter(|| bb(go_to_english(bb(input)).is_ok()));
        });
    }

    group.throughput(Throughput::Elements(EXAMPLES.len() as u64));
    group.bench_function("all_examples", |b| {
        b.iter(|| {
            for src in EXAMPLES {
                bb(go_to_english(bb(src)).is_ok());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_lexer, bench_render);
criterion_main!(benches);
