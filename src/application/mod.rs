//! Application layer - Use cases and orchestration

pub mod edit_session;
pub mod open_journal;

pub use edit_session::EditSession;
pub use open_journal::{ConfigLocation, OpenJournalService};
