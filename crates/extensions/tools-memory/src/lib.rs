//! # F.R.A.N.K.I.E. Memory
//!
//! A local knowledge base kept as one markdown file per entry, plus the
//! `memory` and `retrieve` tools the memory agent works through.

mod backend;
mod document;
mod tools;

pub use backend::MarkdownMemoryBackend;
pub use document::{Document, FrontMatter};
pub use tools::{MemoryTool, RetrieveTool};
