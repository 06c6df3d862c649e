//! Benchmarks for text processing utilities.
//!
//! These benchmarks measure regex performance for the feed item markup
//! handling done at ingestion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;

const SNIPPET: &str = "<p>Release <strong>v2.4</strong> is out with \
    <a href=\"https://news.local/v24\">notes</a>,<br/>including &amp; fixing \
    the <em>feed</em> parser.</p>";

fn bench_regex_compile(c: &mut Criterion) {
    c.bench_function("regex_compile_tag_pattern", |b| {
        b.iter(|| Regex::new(black_box(r"<[^>]*>")))
    });
}

fn bench_regex_strip_tags(c: &mut Criterion) {
    let re = Regex::new(r"<[^>]*>").unwrap();

    c.bench_function("regex_strip_tags", |b| {
        b.iter(|| re.replace_all(black_box(SNIPPET), " "))
    });
}

fn bench_entity_decode(c: &mut Criterion) {
    let entities = [
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&amp;", "&"),
    ];
    let text = "Fish &amp; chips &lt;for two&gt; &quot;tonight&quot;";

    c.bench_function("entity_decode_replace_chain", |b| {
        b.iter(|| {
            let mut result = black_box(text).to_string();
            for (entity, replacement) in entities {
                result = result.replace(entity, replacement);
            }
            result
        })
    });
}

fn bench_whitespace_collapse(c: &mut Criterion) {
    let text = "release   notes\n\n  with \t scattered    whitespace  ";

    c.bench_function("whitespace_collapse", |b| {
        b.iter(|| {
            black_box(text)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
    });
}

criterion_group!(
    benches,
    bench_regex_compile,
    bench_regex_strip_tags,
    bench_entity_decode,
    bench_whitespace_collapse
);
criterion_main!(benches);
