//! Anthropic Messages API provider, with extended thinking support.

mod api;
mod converter;
mod models;
mod parser;
mod provider;

pub use models::get_models;
pub use provider::AnthropicProvider;
