//! Resolution of the journal file for a given day

use crate::domain::format_date;
use crate::error::Result;
use crate::infrastructure::Config;
use chrono::NaiveDate;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A journal file that is known to exist on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedJournal {
    pub path: PathBuf,
    /// True when this call created the (empty) file
    pub created: bool,
}

/// Path of the journal file for `date`, e.g. `journals/2025_01_17.md`
pub fn journal_path(config: &Config, journals_dir: &Path, date: NaiveDate) -> PathBuf {
    let stem = format_date(date, &config.file_name_format);
    let extension = config.preferred_format.extension();
    journals_dir.join(format!("{}{}", stem, extension))
}

/// Compute the journal path for `date` and create an empty file there if none
/// exists. An existing file is never opened for writing, so its content is
/// left alone.
///
/// The journals directory must already exist.
pub fn resolve_journal(
    config: &Config,
    journals_dir: &Path,
    date: NaiveDate,
) -> Result<ResolvedJournal> {
    let path = journal_path(config, journals_dir, date);

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let created = match options.open(&path) {
        Ok(_) => true,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => false,
        Err(e) => return Err(e.into()),
    };

    if created {
        log::info!("Created journal file {}", path.display());
    } else {
        log::debug!("Journal file {} already exists", path.display());
    }

    Ok(ResolvedJournal { path, created })
}
