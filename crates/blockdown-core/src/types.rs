//! Typed document model built from untrusted JSON.
//!
//! Input documents arrive as `serde_json::Value`. [`Block::from_value`]
//! turns one block object into the closed [`Block`] sum type; the per-variant
//! data payloads read their fields leniently (a wrong-typed field reads as
//! absent) so that one bad field degrades that block alone, never the whole
//! document. Required-field policy is enforced by the renderers, not here.

use serde_json::Value;

use crate::enums::{BlockType, Mark};

/// Why a block value could not be mapped to a [`Block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockParseError {
    /// The value is not an object with a string `type` tag.
    MissingType,
    /// The tag is valid at the schema level but not a supported block type.
    UnsupportedType(String),
}

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(HeadingData),
    Paragraph(ParagraphData),
    Code(CodeData),
    Mermaid(MermaidData),
    Table(TableData),
    LayoutColumns(LayoutColumnsData),
    Image(ImageData),
    AnchorLink(AnchorLinkData),
}

impl Block {
    /// Map a raw block value to the typed model.
    ///
    /// A missing `data` payload is treated as an all-absent payload; each
    /// renderer's missing-field policy then decides what to do with it.
    pub fn from_value(value: &Value) -> Result<Self, BlockParseError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(BlockParseError::MissingType)?;
        let block_type =
            BlockType::from_tag(tag).ok_or_else(|| BlockParseError::UnsupportedType(tag.into()))?;
        let data = value.get("data").unwrap_or(&Value::Null);

        Ok(match block_type {
            BlockType::Heading => Block::Heading(HeadingData::from_value(data)),
            BlockType::Paragraph => Block::Paragraph(ParagraphData::from_value(data)),
            BlockType::Code => Block::Code(CodeData::from_value(data)),
            BlockType::Mermaid => Block::Mermaid(MermaidData::from_value(data)),
            BlockType::Table => Block::Table(TableData::from_value(data)),
            BlockType::LayoutColumns => Block::LayoutColumns(LayoutColumnsData::from_value(data)),
            BlockType::Image => Block::Image(ImageData::from_value(data)),
            BlockType::AnchorLink => Block::AnchorLink(AnchorLinkData::from_value(data)),
        })
    }

    /// The discriminant of this block.
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Heading(_) => BlockType::Heading,
            Block::Paragraph(_) => BlockType::Paragraph,
            Block::Code(_) => BlockType::Code,
            Block::Mermaid(_) => BlockType::Mermaid,
            Block::Table(_) => BlockType::Table,
            Block::LayoutColumns(_) => BlockType::LayoutColumns,
            Block::Image(_) => BlockType::Image,
            Block::AnchorLink(_) => BlockType::AnchorLink,
        }
    }
}

/// Data for a heading block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeadingData {
    /// Heading text; rendering is suppressed when absent or empty.
    pub text: Option<String>,
    /// Requested level, clamped to 1-6 at render time.
    pub level: Option<i64>,
    /// Optional id for in-page anchors and the trailing self-link.
    pub anchor_id: Option<String>,
}

impl HeadingData {
    pub fn from_value(data: &Value) -> Self {
        Self {
            text: str_field(data, "text"),
            level: data.get("level").and_then(coerce_int),
            anchor_id: str_field(data, "anchorId"),
        }
    }
}

/// Data for a paragraph block.
///
/// `rich_text` wins over `text` when present and non-empty. Runs stay raw
/// values here; each is validated individually as a [`TextRun`] so one bad
/// run is skipped without dropping its siblings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphData {
    pub text: Option<String>,
    pub rich_text: Option<Vec<Value>>,
}

impl ParagraphData {
    pub fn from_value(data: &Value) -> Self {
        Self {
            text: str_field(data, "text"),
            rich_text: array_field(data, "richText"),
        }
    }
}

/// One styled fragment of inline text within a rich-text paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Literal run content, pre-escaping.
    pub content: String,
    /// Marks to stack, already filtered to the known set.
    pub marks: Vec<Mark>,
    /// The run's `type` tag, normally `"text"` or `"link"`.
    pub kind: Option<String>,
    /// Link target, meaningful only for link runs.
    pub href: Option<String>,
}

impl TextRun {
    /// Validate one raw run. Returns `None` when `content` is not a string;
    /// unknown mark names are ignored.
    pub fn from_value(run: &Value) -> Option<Self> {
        let content = run.get("content")?.as_str()?.to_string();
        let marks = run
            .get("marks")
            .and_then(Value::as_array)
            .map(|marks| {
                marks
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(Mark::from_name)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            content,
            marks,
            kind: str_field(run, "type"),
            href: str_field(run, "href"),
        })
    }

    /// The link target, when this run is a link with a non-empty `href`.
    pub fn link_href(&self) -> Option<&str> {
        if self.kind.as_deref() == Some("link") {
            self.href.as_deref().filter(|href| !href.is_empty())
        } else {
            None
        }
    }
}

/// Data for a code block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeData {
    pub code: Option<String>,
    pub language: Option<String>,
}

impl CodeData {
    pub fn from_value(data: &Value) -> Self {
        Self {
            code: str_field(data, "code"),
            language: str_field(data, "language"),
        }
    }
}

/// Data for a mermaid diagram block. The source is escaped but never
/// otherwise transformed; diagram syntax must survive verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MermaidData {
    pub code: Option<String>,
}

impl MermaidData {
    pub fn from_value(data: &Value) -> Self {
        Self {
            code: str_field(data, "code"),
        }
    }
}

/// Data for a table block.
///
/// Header and row cells stay raw values; they may be plain strings or
/// `{text}` objects, extracted uniformly with [`cell_text`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableData {
    pub headers: Option<Vec<Value>>,
    pub has_header: Option<bool>,
    pub rows: Option<Vec<Value>>,
}

impl TableData {
    pub fn from_value(data: &Value) -> Self {
        Self {
            headers: array_field(data, "headers"),
            has_header: bool_field(data, "hasHeader"),
            rows: array_field(data, "rows"),
        }
    }
}

/// Data for a layout-columns block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutColumnsData {
    /// Authoritative region count; numbers and numeric strings are accepted.
    pub column_count: Option<i64>,
    /// Per-region block sequences, indexed up to `column_count`.
    pub columns: Option<Vec<Value>>,
    /// Optional proportional sizing entries, validated at render time.
    pub distribution: Option<Vec<Value>>,
}

impl LayoutColumnsData {
    pub fn from_value(data: &Value) -> Self {
        Self {
            column_count: data.get("columnCount").and_then(coerce_int),
            columns: array_field(data, "columns"),
            distribution: array_field(data, "distribution"),
        }
    }
}

/// Data for an image block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageData {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

impl ImageData {
    pub fn from_value(data: &Value) -> Self {
        Self {
            url: str_field(data, "url"),
            alt: str_field(data, "alt"),
            caption: str_field(data, "caption"),
        }
    }
}

/// Data for a standalone block-level link.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnchorLinkData {
    pub text: Option<String>,
    pub href: Option<String>,
}

impl AnchorLinkData {
    pub fn from_value(data: &Value) -> Self {
        Self {
            text: str_field(data, "text"),
            href: str_field(data, "href"),
        }
    }
}

/// Extract the text of a table cell, accepting both the plain-string and the
/// `{text: string}` representations. Returns `None` for any other shape.
pub fn cell_text(cell: &Value) -> Option<&str> {
    match cell {
        Value::String(text) => Some(text),
        Value::Object(map) => map.get("text").and_then(Value::as_str),
        _ => None,
    }
}

fn str_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bool_field(data: &Value, key: &str) -> Option<bool> {
    data.get(key).and_then(Value::as_bool)
}

fn array_field(data: &Value, key: &str) -> Option<Vec<Value>> {
    data.get(key).and_then(Value::as_array).cloned()
}

/// Coerce a count-like value to an integer: integers pass through, integral
/// floats truncate, numeric strings parse. Anything else is absent.
fn coerce_int(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if let Some(f) = value.as_f64() {
        return Some(f.trunc() as i64);
    }
    value.as_str().and_then(|s| s.trim().parse().ok())
}
