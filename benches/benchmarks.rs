//! Benchmarks for the pagination pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flip_pager::{extract_blocks, Dimensions, LineBreaker, Paginator};

fn tablet_page() -> Dimensions {
    Dimensions::new(520.0, 780.0)
}

fn chapter(paragraphs: usize, words: usize) -> String {
    let mut html = String::new();
    for i in 0..paragraphs {
        html.push_str(&format!(
            r#"<p data-uuid="c{}" data-page-uuid="s{}">"#,
            i,
            i / 8
        ));
        for w in 0..words {
            if w > 0 {
                html.push(' ');
            }
            html.push_str(["reading", "a", "chapter", "of", "considerable", "length"][w % 6]);
        }
        html.push_str("</p>");
        if i % 10 == 9 {
            html.push_str(r#"<img src="figure.png">"#);
        }
    }
    html
}

fn bench_extract(c: &mut Criterion) {
    let html = chapter(200, 60);
    c.bench_function("extract_blocks", |b| {
        b.iter(|| black_box(extract_blocks(black_box(&html))));
    });
}

fn bench_count_lines(c: &mut Criterion) {
    let breaker = LineBreaker::default();
    let html = chapter(1, 400);
    c.bench_function("count_lines_long_paragraph", |b| {
        b.iter(|| black_box(breaker.count_lines(black_box(&html), 520.0)));
    });
}

fn bench_paginate_chapter(c: &mut Criterion) {
    let paginator = Paginator::default();
    let html = chapter(200, 60);
    c.bench_function("paginate_chapter", |b| {
        b.iter(|| black_box(paginator.paginate(black_box(&html), tablet_page())));
    });
}

fn bench_paginate_oversized(c: &mut Criterion) {
    let paginator = Paginator::default();
    // one paragraph many pages long exercises the split loop
    let html = chapter(1, 3000);
    c.bench_function("paginate_oversized_paragraph", |b| {
        b.iter(|| black_box(paginator.break_into_pages(black_box(&html), tablet_page())));
    });
}

criterion_group!(
    benches,
    bench_extract,
    bench_count_lines,
    bench_paginate_chapter,
    bench_paginate_oversized,
);

criterion_main!(benches);
