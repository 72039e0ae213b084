//! Document state: the file behind the buffer and its modified flag.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Tracks which file the buffer belongs to and whether it has unsaved
/// changes. Text content lives in the buffer; this only owns the identity.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentState {
    path: Option<PathBuf>,
    modified: bool,
}

impl DocumentState {
    /// A fresh, unsaved document.
    pub const fn new() -> Self {
        Self {
            path: None,
            modified: false,
        }
    }

    /// State for a document loaded from `path`.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            modified: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    pub const fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Display name for the title/status line.
    pub fn display_name(&self) -> String {
        self.path.as_ref().map_or_else(
            || "[untitled]".to_string(),
            |p| p.display().to_string(),
        )
    }

    /// True for a pristine untitled document with no text — the state in
    /// which opening a file may reuse the window without prompting.
    pub fn is_new_and_empty(&self, current_text: &str) -> bool {
        self.path.is_none() && !self.modified && current_text.is_empty()
    }
}

/// Read a document file to a string.
pub fn load_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write document content to a file.
pub fn save_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
