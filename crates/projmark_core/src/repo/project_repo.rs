//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide single-statement CRUD over the `project` table.
//!
//! # Invariants
//! - Rows are returned in primary-key order.
//! - Deleting a missing id is not an error; it affects zero rows.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::project::{Project, ProjectId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PROJECT_TABLE: &str = "project";
const PROJECT_SELECT_SQL: &str = "SELECT id, name, path FROM project";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for project persistence and lookup.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ProjectId),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "project not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it with db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for project CRUD operations.
pub trait ProjectRepository {
    /// Inserts a row and returns the id assigned by the store.
    fn create_project(&self, name: &str, path: &str) -> RepoResult<ProjectId>;
    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    /// Reads every row in id order, keeping per-row decode failures in place
    /// so one unreadable row does not hide the others.
    fn scan_projects(&self) -> RepoResult<Vec<RepoResult<Project>>>;

    /// Like `scan_projects`, but fails on the first unreadable row.
    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        self.scan_projects()?.into_iter().collect()
    }

    /// Returns the number of removed rows (0 or 1).
    fn delete_project(&self, id: ProjectId) -> RepoResult<usize>;
}

/// SQLite-backed project repository borrowing a bootstrapped connection.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` when the schema version claims to be current
    ///   but the `project` table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        if !table_exists(conn, PROJECT_TABLE)? {
            return Err(RepoError::MissingRequiredTable(PROJECT_TABLE));
        }

        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&self, name: &str, path: &str) -> RepoResult<ProjectId> {
        self.conn.execute(
            "INSERT INTO project (name, path) VALUES (?1, ?2);",
            params![name, path],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let project = self
            .conn
            .query_row(
                &format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_project_row,
            )
            .optional()?;
        Ok(project)
    }

    fn scan_projects(&self) -> RepoResult<Vec<RepoResult<Project>>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();

        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row).map_err(RepoError::from));
        }

        Ok(projects)
    }

    fn delete_project(&self, id: ProjectId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM project WHERE id = ?1;", [id])?;
        Ok(changed)
    }
}

fn parse_project_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        path: row.get("path")?,
    })
}

fn table_exists(conn: &Connection, table_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
