//! Closed discriminant enums for the document model.
//!
//! Block dispatch is driven by [`BlockType`], a closed enum over the eight
//! supported block tags. Keeping it closed means the dispatcher's match is
//! exhaustive and the compiler flags any future variant addition.

use std::fmt;

/// The type tag of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Section heading (h1-h6)
    Heading,
    /// Paragraph with flat text or rich-text runs
    Paragraph,
    /// Fenced code listing
    Code,
    /// Mermaid diagram source
    Mermaid,
    /// Header/body table
    Table,
    /// Side-by-side layout regions
    LayoutColumns,
    /// Figure with optional caption
    Image,
    /// Standalone block-level link
    AnchorLink,
}

impl BlockType {
    /// All supported block types, in dispatch order.
    pub const ALL: [BlockType; 8] = [
        BlockType::Heading,
        BlockType::Paragraph,
        BlockType::Code,
        BlockType::Mermaid,
        BlockType::Table,
        BlockType::LayoutColumns,
        BlockType::Image,
        BlockType::AnchorLink,
    ];

    /// Resolve a `type` tag string. Unknown tags return `None`; they are
    /// schema-valid but unsupported by the renderer.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "heading" => Some(BlockType::Heading),
            "paragraph" => Some(BlockType::Paragraph),
            "code" => Some(BlockType::Code),
            "mermaid" => Some(BlockType::Mermaid),
            "table" => Some(BlockType::Table),
            "layoutColumns" => Some(BlockType::LayoutColumns),
            "image" => Some(BlockType::Image),
            "anchorLink" => Some(BlockType::AnchorLink),
            _ => None,
        }
    }

    /// The wire tag for this block type.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockType::Heading => "heading",
            BlockType::Paragraph => "paragraph",
            BlockType::Code => "code",
            BlockType::Mermaid => "mermaid",
            BlockType::Table => "table",
            BlockType::LayoutColumns => "layoutColumns",
            BlockType::Image => "image",
            BlockType::AnchorLink => "anchorLink",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A named inline style applicable to a rich-text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// `<strong>`
    Bold,
    /// `<em>`
    Italic,
    /// `<u>`
    Underline,
    /// `<code>`
    Code,
}

impl Mark {
    /// The fixed stacking order for marks on a single run. Later entries
    /// wrap outside earlier ones, so order changes tag nesting.
    pub const STACKING_ORDER: [Mark; 4] = [Mark::Bold, Mark::Italic, Mark::Underline, Mark::Code];

    /// Resolve a mark name. Unknown names return `None` and are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Mark::Bold),
            "italic" => Some(Mark::Italic),
            "underline" => Some(Mark::Underline),
            "code" => Some(Mark::Code),
            _ => None,
        }
    }

    /// The wire name for this mark.
    pub fn name(&self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
            Mark::Code => "code",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
