pub mod help;
pub mod input;
pub mod output;
mod shell;
pub mod ui;

pub use shell::{report, run_cli, run_session, SessionEnd};
