//! Garimpo Context - Project context loading
//!
//! Supplies the framework builders with plain-text project metadata:
//! - `ContextSnapshot`: the four context blobs read from a `.garimpo` dir
//! - `ContextLoader`: the injectable seam, with a directory-based
//!   implementation and a null implementation for context-free callers
//! - `extract_project_info`: line-prefix extraction of name/stack/phase
//!
//! Loading is infallible: a missing directory or unreadable file degrades
//! to empty text and never blocks prompt construction.

mod info;
mod loader;

pub use info::{extract_project_info, ProjectInfo};
pub use loader::{find_project_dir, ContextLoader, ContextSnapshot, DirContextLoader, NullLoader};
