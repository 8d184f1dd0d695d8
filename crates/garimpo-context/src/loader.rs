use std::fs;
use std::path::{Path, PathBuf};

use garimpo_core::GARIMPO_DIR;
use tracing::debug;

/// Kit text shorter than this is treated as absent.
const KIT_MIN_LEN: usize = 50;

/// The four plain-text blobs a project context is made of. Any of them may
/// be empty.
#[derive(Debug, Clone, Default)]
pub struct ContextSnapshot {
    pub project: String,
    pub state: String,
    pub kit: String,
    pub active_context: String,
}

impl ContextSnapshot {
    /// Whether the project carries a usable component kit.
    pub fn has_kit(&self) -> bool {
        self.kit.len() > KIT_MIN_LEN
    }

    pub fn has_state(&self) -> bool {
        self.state.len() > KIT_MIN_LEN
    }
}

/// Seam for supplying project context to the framework builders.
pub trait ContextLoader: Send + Sync {
    fn load(&self) -> ContextSnapshot;
}

/// Loads context files from a `.garimpo` directory. Missing files become
/// empty strings; nothing here ever fails.
#[derive(Debug, Clone)]
pub struct DirContextLoader {
    root: Option<PathBuf>,
}

impl DirContextLoader {
    /// Use an explicit context directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Walk upward from `start` looking for a `.garimpo` directory.
    pub fn discover(start: impl AsRef<Path>) -> Self {
        Self {
            root: find_project_dir(start.as_ref()),
        }
    }

    /// Discover from the process working directory.
    pub fn from_cwd() -> Self {
        match std::env::current_dir() {
            Ok(cwd) => Self::discover(cwd),
            Err(_) => Self { root: None },
        }
    }
}

impl ContextLoader for DirContextLoader {
    fn load(&self) -> ContextSnapshot {
        let Some(root) = &self.root else {
            return ContextSnapshot::default();
        };
        let snapshot = ContextSnapshot {
            project: read_or_empty(&root.join("PROJECT.md")),
            state: read_or_empty(&root.join("STATE.md")),
            kit: read_or_empty(&root.join("KIT.md")),
            active_context: read_or_empty(&root.join("active_context.md")),
        };
        debug!(
            root = %root.display(),
            has_kit = snapshot.has_kit(),
            "loaded project context"
        );
        snapshot
    }
}

/// Loader for callers that want no project context at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLoader;

impl ContextLoader for NullLoader {
    fn load(&self) -> ContextSnapshot {
        ContextSnapshot::default()
    }
}

/// Find the nearest `.garimpo` directory at or above `start`, capped at 20
/// parent levels.
pub fn find_project_dir(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    for _ in 0..20 {
        let candidate = dir.join(GARIMPO_DIR);
        if candidate.is_dir() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn read_or_empty(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}
