use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eldrow::{Constraints, Length, WordFilter};

/// Synthetic dictionary with affix suffixes on every third line.
fn synthetic_words(n: usize) -> Vec<String> {
    let letters = b"abcdefghijklmnopqrstuvwxyz";
    (0..n)
        .map(|i| {
            let len = 3 + i % 6;
            let word: String = (0..len)
                .map(|j| letters[(i * 7 + j * 13) % letters.len()] as char)
                .collect();
            if i % 3 == 0 {
                format!("{}/MS", word)
            } else {
                word
            }
        })
        .map(|line| eldrow::normalize_line(&line).to_string())
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let words = synthetic_words(50_000);

    let length_only = WordFilter::new(&Constraints::new(Length::exact(5).unwrap())).unwrap();
    c.bench_function("filter_length_only", |b| {
        b.iter(|| length_only.filter(black_box(&words)))
    });

    let letters = WordFilter::new(
        &Constraints::new(Length::exact(5).unwrap())
            .with_include("ae")
            .with_skip("xyz"),
    )
    .unwrap();
    c.bench_function("filter_include_skip", |b| {
        b.iter(|| letters.filter(black_box(&words)))
    });

    let pattern = WordFilter::new(&Constraints::new(Length::Any).with_pattern("c.a.*")).unwrap();
    c.bench_function("filter_pattern", |b| b.iter(|| pattern.filter(black_box(&words))));
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
