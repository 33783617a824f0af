pub mod csv;
pub mod json;

pub use csv::{write_history, write_history_file};
pub use json::{write_summary, write_summary_file, BurnSummary};
