//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod edn;
pub mod editor;
pub mod journal;
pub mod repository;

pub use config::Config;
pub use editor::{select_editor, select_editor_from_env, EditorSession};
pub use journal::{journal_path, resolve_journal, ResolvedJournal};
pub use repository::{read_journal, write_journal, VaultRepository};
