//! Project use-case service.
//!
//! # Responsibility
//! - Provide the create/fetch/list/delete entry points used by the CLI.
//! - Emit metadata-only diagnostics for each store operation.
//!
//! # Invariants
//! - Names and paths are stored verbatim; no validation is applied.
//! - Project names and paths are never written to logs.

use crate::model::project::{Project, ProjectId};
use crate::repo::project_repo::{ProjectRepository, RepoError, RepoResult};
use log::{error, info};
use std::time::Instant;

/// Use-case wrapper around a project repository.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a new project and returns its assigned id.
    pub fn create_project(&self, name: &str, path: &str) -> RepoResult<ProjectId> {
        let started_at = Instant::now();
        match self.repo.create_project(name, path) {
            Ok(id) => {
                info!(
                    "event=project_create module=service status=ok project_id={id} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(id)
            }
            Err(err) => {
                error!(
                    "event=project_create module=service status=error duration_ms={} error_code=insert_failed error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    /// Fetches one project.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no row has this id.
    pub fn fetch_project(&self, id: ProjectId) -> RepoResult<Project> {
        let started_at = Instant::now();
        let result = self
            .repo
            .get_project(id)
            .and_then(|project| project.ok_or(RepoError::NotFound(id)));

        match &result {
            Ok(_) => info!(
                "event=project_get module=service status=ok project_id={id} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(RepoError::NotFound(_)) => info!(
                "event=project_get module=service status=not_found project_id={id} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=project_get module=service status=error project_id={id} duration_ms={} error_code=query_failed error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }

    /// Lists every project in id order. Empty store yields an empty vec.
    pub fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let started_at = Instant::now();
        let result = self.repo.list_projects();
        match &result {
            Ok(projects) => info!(
                "event=project_list module=service status=ok count={} duration_ms={}",
                projects.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=project_list module=service status=error duration_ms={} error_code=query_failed error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }

    /// Lists every row in id order with per-row read results.
    pub fn scan_projects(&self) -> RepoResult<Vec<RepoResult<Project>>> {
        let started_at = Instant::now();
        let result = self.repo.scan_projects();
        match &result {
            Ok(rows) => info!(
                "event=project_list module=service status=ok count={} unreadable={} duration_ms={}",
                rows.len(),
                rows.iter().filter(|row| row.is_err()).count(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=project_list module=service status=error duration_ms={} error_code=query_failed error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }

    /// Hard-deletes a project and returns the number of removed rows.
    pub fn delete_project(&self, id: ProjectId) -> RepoResult<usize> {
        let started_at = Instant::now();
        let result = self.repo.delete_project(id);
        match &result {
            Ok(count) => info!(
                "event=project_delete module=service status=ok project_id={id} deleted={count} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=project_delete module=service status=error project_id={id} duration_ms={} error_code=delete_failed error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}
