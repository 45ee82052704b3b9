//! Common types used across the workspace.

mod message;
mod common;

pub use message::*;
pub use common::*;
