//! Core domain logic for projmark, a local project bookmark store.

pub mod db;
pub mod launch;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use launch::{LaunchError, LaunchResult, ProjectOpener, SystemOpener, EDITOR_COMMAND};
pub use logging::{default_log_level, init_logging};
pub use model::project::{Project, ProjectId};
pub use repo::project_repo::{
    ProjectRepository, RepoError, RepoResult, SqliteProjectRepository,
};
pub use service::project_service::ProjectService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
