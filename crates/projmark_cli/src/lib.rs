//! Interactive command loop for projmark.
//!
//! # Responsibility
//! - Resolve runtime configuration from the environment.
//! - Drive the read-dispatch-print cycle over the project store.

pub mod command;
pub mod config;
pub mod session;
pub mod startup;

pub use command::{parse_project_id, Command, CommandError};
pub use config::CliConfig;
pub use session::Session;
pub use startup::open_store;
