use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mal_reader::{tokenize, Reader};

const SOURCE: &str = r#"(defn fib (n) (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2))))) ; "naive""#;

fn lexer_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize line", |b| {
        b.iter(|| tokenize(black_box(SOURCE)).unwrap())
    });
}

fn reader_benchmark(c: &mut Criterion) {
    c.bench_function("read line", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(SOURCE)).unwrap();
            reader.parse_ast().unwrap()
        })
    });

    let deep = format!("{}x{}", "(".repeat(200), ")".repeat(200));
    c.bench_function("read deeply nested line", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&deep)).unwrap();
            reader.parse_ast().unwrap()
        })
    });
}

criterion_group!(benches, lexer_benchmark, reader_benchmark);
criterion_main!(benches);
