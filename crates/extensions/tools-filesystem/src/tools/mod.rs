//! File system tool implementations.

mod read_file;
mod write_file;
mod edit_file;
mod list_dir;
mod diagram;

pub use read_file::ReadFileTool;
pub use write_file::WriteFileTool;
pub use edit_file::EditFileTool;
pub use list_dir::ListDirectoryTool;
pub use diagram::{DiagramKind, DiagramTool};
