//! LLM Provider protocol definitions.
//!
//! Providers connect to a hosted model API and provide completions.

mod traits;
mod request;
mod response;
mod model;

pub use traits::*;
pub use request::*;
pub use response::*;
pub use model::*;
