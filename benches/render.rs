//! Rendering benchmarks for blockdown.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

fn sample_document() -> Value {
    json!({"document": {"blocks": [
        {"type": "heading", "data": {"text": "Benchmark", "level": 1, "anchorId": "bench"}},
        {"type": "paragraph", "data": {"text": "Some **bold** and *italic* text with [color:red]color[/color].\nSecond line."}},
        {"type": "paragraph", "data": {"richText": [
            {"content": "runs ", "marks": ["bold"]},
            {"content": "and ", "marks": ["italic", "underline"]},
            {"type": "link", "href": "https://example.com", "content": "links"}
        ]}},
        {"type": "code", "data": {"language": "rust", "code": "fn main() {\n    println!(\"hi\");\n}"}},
        {"type": "mermaid", "data": {"code": "graph TD;\nA-->B;"}},
        {"type": "table", "data": {
            "hasHeader": true,
            "headers": ["A", {"text": "B"}, "C"],
            "rows": [["1", "2", "3"], [{"text": "4"}, "5", "6"]]
        }},
        {"type": "layoutColumns", "data": {
            "columnCount": 2,
            "distribution": ["40%", "60%"],
            "columns": [
                [{"type": "paragraph", "data": {"text": "left"}}],
                [{"type": "paragraph", "data": {"text": "right"}}]
            ]
        }},
        {"type": "image", "data": {"url": "https://example.com/pic.png", "alt": "pic", "caption": "A pic"}},
        {"type": "anchorLink", "data": {"text": "More", "href": "https://example.com/more"}}
    ]}})
}

fn bench_render_document(c: &mut Criterion) {
    let doc = sample_document();
    c.bench_function("render_document", |b| {
        b.iter(|| blockdown_render::render(black_box(&doc)))
    });
}

fn bench_escape(c: &mut Criterion) {
    let text = "plain text with <tags> & \"quotes\" repeated ".repeat(20);
    c.bench_function("escape_html", |b| {
        b.iter(|| blockdown_html::escape_html(black_box(&text)))
    });
}

criterion_group!(benches, bench_render_document, bench_escape);
criterion_main!(benches);
