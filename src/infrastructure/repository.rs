//! File system access to a Logseq vault

use crate::error::{LsqError, Result};
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};

const JOURNALS_DIR: &str = "journals";

/// A vault on disk: `{root}/journals/*` plus a config directory
#[derive(Debug, Clone)]
pub struct VaultRepository {
    pub root: PathBuf,
}

impl VaultRepository {
    /// Create a repository for the given vault root
    pub fn new(root: PathBuf) -> Self {
        VaultRepository { root }
    }

    /// Locate a vault by name relative to the home directory.
    /// Absolute paths are used as-is.
    pub fn locate(dir: &Path) -> Result<Self> {
        if dir.is_absolute() {
            return Ok(VaultRepository::new(dir.to_path_buf()));
        }

        let base = BaseDirs::new().ok_or_else(|| LsqError::HomeDirectory(dir.to_path_buf()))?;
        Ok(VaultRepository::new(base.home_dir().join(dir)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn journals_dir(&self) -> PathBuf {
        self.root.join(JOURNALS_DIR)
    }

    /// Path of the config file, e.g. `{root}/logseq/config.edn`
    pub fn config_path(&self, config_dir: &str, config_file: &str) -> PathBuf {
        self.root.join(config_dir).join(config_file)
    }

    /// Create the journals directory (and any missing parents)
    pub fn ensure_journals_dir(&self) -> Result<PathBuf> {
        let dir = self.journals_dir();
        if !dir.is_dir() {
            let mut builder = fs::DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::DirBuilderExt;
                builder.mode(0o755);
            }
            builder.create(&dir)?;
            log::info!("Created journals directory {}", dir.display());
        }
        Ok(dir)
    }
}

/// Read a journal file into memory
pub fn read_journal(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Overwrite a journal file with `content`
pub fn write_journal(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths() {
        let repo = VaultRepository::new(PathBuf::from("/home/me/Logseq"));
        assert_eq!(repo.journals_dir(), PathBuf::from("/home/me/Logseq/journals"));
        assert_eq!(
            repo.config_path("logseq", "config.edn"),
            PathBuf::from("/home/me/Logseq/logseq/config.edn")
        );
    }

    #[test]
    fn test_locate_absolute_path() {
        let temp = TempDir::new().unwrap();
        let repo = VaultRepository::locate(temp.path()).unwrap();
        assert_eq!(repo.root(), temp.path());
    }

    #[test]
    fn test_locate_relative_to_home() {
        if let Some(base) = BaseDirs::new() {
            let repo = VaultRepository::locate(Path::new("Logseq")).unwrap();
            assert_eq!(repo.root(), base.home_dir().join("Logseq"));
        }
    }

    #[test]
    fn test_ensure_journals_dir_creates_parents() {
        let temp = TempDir::new().unwrap();
        let repo = VaultRepository::new(temp.path().join("vault"));

        let dir = repo.ensure_journals_dir().unwrap();
        assert!(dir.is_dir());

        // Second call is a no-op
        assert_eq!(repo.ensure_journals_dir().unwrap(), dir);
    }

    #[test]
    fn test_read_write_journal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2025_01_17.md");

        write_journal(&path, "- TODO first").unwrap();
        assert_eq!(read_journal(&path).unwrap(), "- TODO first");

        write_journal(&path, "").unwrap();
        assert_eq!(read_journal(&path).unwrap(), "");
    }
}
