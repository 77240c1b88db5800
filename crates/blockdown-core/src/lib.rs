//! Blockdown Core
//!
//! This crate provides the document model, error definitions, and the
//! diagnostic side channel for the blockdown HTML renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Block`] and its per-variant data payloads - the typed document model
//! - [`BlockType`], [`Mark`] - closed discriminant enums
//! - [`BlockdownError`] - Error types
//! - [`DiagnosticSink`], [`LogSink`], [`MemorySink`] - diagnostic reporting

pub mod diag;
pub mod enums;
pub mod error;
pub mod types;

pub use diag::{Diagnostic, DiagnosticSink, LogSink, MemorySink, Severity};
pub use enums::{BlockType, Mark};
pub use error::{BlockdownError, Result};
pub use types::{
    cell_text, AnchorLinkData, Block, BlockParseError, CodeData, HeadingData, ImageData,
    LayoutColumnsData, MermaidData, ParagraphData, TableData, TextRun,
};
