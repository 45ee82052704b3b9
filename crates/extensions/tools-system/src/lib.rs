//! System tools:
//! - `exec`: run a shell command (also backs the REPL's `!` escape)
//! - `current_time`: the current date and time

mod exec;
mod time;

pub use exec::ExecTool;
pub use time::CurrentTimeTool;
