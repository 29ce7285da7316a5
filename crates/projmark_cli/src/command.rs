//! Command words and id input parsing.

use projmark_core::ProjectId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One line typed at the `command> ` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Open,
    List,
    Delete,
    Exit,
    Unknown,
}

impl Command {
    /// Matches the trimmed line exactly; command words are case-sensitive.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "create" => Self::Create,
            "open" => Self::Open,
            "list" => Self::List,
            "delete" => Self::Delete,
            "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidId(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(raw) => write!(f, "invalid project id `{raw}`"),
        }
    }
}

impl Error for CommandError {}

/// Parses a project id typed at the `project ID: ` prompt.
pub fn parse_project_id(input: &str) -> Result<ProjectId, CommandError> {
    let trimmed = input.trim();
    trimmed
        .parse::<ProjectId>()
        .map_err(|_| CommandError::InvalidId(trimmed.to_string()))
}
