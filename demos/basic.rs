//! Basic usage: render a block document to HTML on stdout.
//!
//! Run with: `cargo run --example basic`

use serde_json::json;

fn main() {
    let doc = json!({"document": {"blocks": [
        {"type": "heading", "data": {"level": 1, "text": "Hello, Blockdown", "anchorId": "hello"}},
        {"type": "paragraph", "data": {"richText": [
            {"type": "text", "content": "This paragraph mixes "},
            {"type": "text", "content": "bold", "marks": ["bold"]},
            {"type": "text", "content": " and "},
            {"type": "text", "content": "code", "marks": ["code"]},
            {"type": "text", "content": " with a "},
            {"type": "link", "href": "https://example.com", "content": "link"},
            {"type": "text", "content": "."}
        ]}},
        {"type": "paragraph", "data": {"text": "Flat text supports **bold**, *italic*, and [color:tomato]color tags[/color]."}},
        {"type": "code", "data": {"language": "rust", "code": "fn main() {\n    println!(\"hi\");\n}"}},
        {"type": "table", "data": {
            "hasHeader": true,
            "headers": ["Name", "Value"],
            "rows": [["answer", "42"], ["pi", "3.14"]]
        }}
    ]}});

    print!("{}", blockdown_render::render(&doc));
}
