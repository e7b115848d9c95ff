//! Open today's journal use case

use crate::error::Result;
use crate::infrastructure::{
    resolve_journal, select_editor_from_env, Config, EditorSession, ResolvedJournal,
    VaultRepository,
};
use chrono::NaiveDate;

/// Where the vault keeps its config file, relative to the vault root
#[derive(Debug, Clone)]
pub struct ConfigLocation {
    pub dir: String,
    pub file: String,
}

impl Default for ConfigLocation {
    fn default() -> Self {
        ConfigLocation {
            dir: "logseq".to_string(),
            file: "config.edn".to_string(),
        }
    }
}

/// Service for resolving and opening the journal of a day
pub struct OpenJournalService {
    repository: VaultRepository,
    config_location: ConfigLocation,
}

impl OpenJournalService {
    /// Create a new open journal service
    pub fn new(repository: VaultRepository, config_location: ConfigLocation) -> Self {
        OpenJournalService {
            repository,
            config_location,
        }
    }

    pub fn repository(&self) -> &VaultRepository {
        &self.repository
    }

    /// Load the vault config. A missing or broken file is reported as a
    /// warning and the defaults are used instead.
    pub fn load_config(&self) -> Config {
        let path = self
            .repository
            .config_path(&self.config_location.dir, &self.config_location.file);

        let (config, err) = Config::load_or_default(&path);
        match err {
            Some(e) => log::warn!("{}; using default settings", e),
            None => log::debug!("Loaded config from {}", path.display()),
        }
        config
    }

    /// Make sure the journal for `date` exists and return it with the config
    /// used to name it.
    pub fn execute(&self, date: NaiveDate) -> Result<(Config, ResolvedJournal)> {
        // 1. Load config (fail-open)
        let config = self.load_config();
        log::debug!(
            "Journal format: {} ({})",
            config.preferred_format,
            config.file_name_format
        );

        // 2. Make sure journals/ exists
        let journals_dir = self.repository.ensure_journals_dir()?;

        // 3. Resolve and create the day's file
        let journal = resolve_journal(&config, &journals_dir, date)?;

        Ok((config, journal))
    }

    /// Open a resolved journal in the editor chosen by `editor_token`
    pub fn open_in_editor(&self, journal: &ResolvedJournal, editor_token: &str) -> Result<()> {
        let editor = EditorSession::new(select_editor_from_env(editor_token));
        editor.open(&journal.path)
    }
}
