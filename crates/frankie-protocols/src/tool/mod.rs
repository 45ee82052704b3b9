//! Tool protocol definitions.
//!
//! Tools are how a hosted model acts on the world: every specialist agent,
//! every desktop primitive and every fetch utility is exposed as a [`Tool`].

mod traits;
mod definition;
mod context;
mod result;

pub use traits::*;
pub use definition::*;
pub use context::*;
pub use result::*;
