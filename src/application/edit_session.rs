//! In-memory editing of a journal file

use crate::domain::{cycle_priority, cycle_state};
use crate::error::Result;
use crate::infrastructure::{read_journal, write_journal};
use std::path::{Path, PathBuf};

/// A journal buffer being edited, tied to the file it was loaded from
#[derive(Debug, Clone)]
pub struct EditSession {
    path: PathBuf,
    buffer: String,
    modified: bool,
}

impl EditSession {
    /// Load a journal file into a new session
    pub fn open(path: &Path) -> Result<Self> {
        let buffer = read_journal(path)?;
        Ok(EditSession {
            path: path.to_path_buf(),
            buffer,
            modified: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Replace the whole buffer, e.g. after the text area was edited
    pub fn replace_buffer(&mut self, text: String) {
        if text != self.buffer {
            self.buffer = text;
            self.modified = true;
        }
    }

    /// Cycle the TODO state of line `line_idx` (0-based).
    /// Returns whether the buffer changed.
    pub fn cycle_state_at(&mut self, line_idx: usize) -> bool {
        self.rewrite_line(line_idx, cycle_state)
    }

    /// Cycle the priority of line `line_idx` (0-based).
    /// Returns whether the buffer changed.
    pub fn cycle_priority_at(&mut self, line_idx: usize) -> bool {
        self.rewrite_line(line_idx, cycle_priority)
    }

    fn rewrite_line(&mut self, line_idx: usize, rewrite: fn(&str) -> String) -> bool {
        let mut lines: Vec<String> = self.buffer.split('\n').map(str::to_string).collect();
        let Some(line) = lines.get_mut(line_idx) else {
            return false;
        };

        let new_line = rewrite(line.as_str());
        if new_line == *line {
            return false;
        }
        *line = new_line;

        self.buffer = lines.join("\n");
        self.modified = true;
        true
    }

    /// Write the buffer back to its file
    pub fn save(&mut self) -> Result<()> {
        write_journal(&self.path, &self.buffer)?;
        self.modified = false;
        log::info!("Saved {}", self.path.display());
        Ok(())
    }

    /// Re-read the file, dropping unsaved changes
    pub fn reload(&mut self) -> Result<()> {
        self.buffer = read_journal(&self.path)?;
        self.modified = false;
        Ok(())
    }
}
