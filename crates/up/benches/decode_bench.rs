use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn make_flat(entries: usize) -> String {
    let mut s = String::new();
    for i in 0..entries {
        s.push_str(&format!("key{i} value number {i}\n"));
    }
    s
}

fn make_nested(blocks: usize) -> String {
    let mut s = String::new();
    for i in 0..blocks {
        s.push_str(&format!("block{i} {{\n  host h{i}\n  port!int {i}\n}}\n"));
    }
    s
}

fn make_table(rows: usize) -> String {
    let mut s = String::from("rows |\n  id next name\n");
    for i in 0..rows {
        s.push_str(&format!("  {} {} row{}\n", i, i + 1, i));
    }
    s.push_str("|\n");
    s
}

pub fn decode_benchmarks(c: &mut Criterion) {
    let cases = vec![
        ("flat_1k", make_flat(1000)),
        ("nested_500", make_nested(500)),
        ("table_1k", make_table(1000)),
    ];
    let mut group = c.benchmark_group("parse_up");
    for (name, input) in cases {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                || input.clone(),
                |s| {
                    let doc = up::parse(&s).unwrap();
                    black_box(doc)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn roundtrip_benchmarks(c: &mut Criterion) {
    let input = make_nested(500);
    let doc = up::parse(&input).unwrap();
    let mut group = c.benchmark_group("encode_up");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("nested_500", |b| {
        b.iter(|| black_box(up::encode_to_string(&doc)))
    });
    group.finish();
}

criterion_group!(benches, decode_benchmarks, roundtrip_benchmarks);
criterion_main!(benches);
