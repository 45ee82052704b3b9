//! File tools for the coding, content and memory agents.
//!
//! Reading, writing and search/replace editing of files, directory listings,
//! and Mermaid diagram generation.

mod tools;

pub use tools::*;
