//! Domain layer - Pure journal and task rules

pub mod date_format;
pub mod dialect;
pub mod todo;

pub use date_format::{format_date, translate};
pub use dialect::MarkupDialect;
pub use todo::{cycle_priority, cycle_state, Priority, TaskLine, TaskState};
