//! The interactive read-dispatch-print loop.
//!
//! # Invariants
//! - Errors inside a command branch are printed and the loop continues.
//! - Only `exit` or end of input stops the loop.
//! - I/O errors on the session's own streams are returned to the caller.

use crate::command::{parse_project_id, Command};
use log::{info, warn};
use projmark_core::{ProjectId, ProjectOpener, ProjectRepository, ProjectService, RepoError};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

const COMMAND_PROMPT: &str = "command> ";
const NAME_PROMPT: &str = "project name: ";
const PATH_PROMPT: &str = "project path: ";
const ID_PROMPT: &str = "project ID: ";

type Step = io::Result<ControlFlow<()>>;

enum IdInput {
    Id(ProjectId),
    Invalid,
    Eof,
}

/// One interactive session over a project store.
pub struct Session<R, In, Out, O>
where
    R: ProjectRepository,
    In: BufRead,
    Out: Write,
    O: ProjectOpener,
{
    service: ProjectService<R>,
    input: In,
    output: Out,
    opener: O,
}

impl<R, In, Out, O> Session<R, In, Out, O>
where
    R: ProjectRepository,
    In: BufRead,
    Out: Write,
    O: ProjectOpener,
{
    pub fn new(service: ProjectService<R>, input: In, output: Out, opener: O) -> Self {
        Self {
            service,
            input,
            output,
            opener,
        }
    }

    pub fn output(&self) -> &Out {
        &self.output
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Runs until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let mut commands = 0usize;
        loop {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                info!("event=session_end module=cli status=ok reason=eof commands={commands}");
                return Ok(());
            };

            let step = match Command::parse(&line) {
                Command::Create => self.create()?,
                Command::Open => self.open()?,
                Command::List => self.list()?,
                Command::Delete => self.delete()?,
                Command::Exit => {
                    info!(
                        "event=session_end module=cli status=ok reason=exit commands={commands}"
                    );
                    return Ok(());
                }
                Command::Unknown => {
                    writeln!(self.output, "Invalid command")?;
                    ControlFlow::Continue(())
                }
            };
            commands += 1;

            if step.is_break() {
                info!("event=session_end module=cli status=ok reason=eof commands={commands}");
                return Ok(());
            }
        }
    }

    fn create(&mut self) -> Step {
        let Some(name) = self.prompt(NAME_PROMPT)? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(path) = self.prompt(PATH_PROMPT)? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.service.create_project(&name, &path) {
            Ok(id) => writeln!(self.output, "Project created with ID: {id}")?,
            Err(err) => writeln!(self.output, "Error inserting project: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn open(&mut self) -> Step {
        let id = match self.prompt_id()? {
            IdInput::Id(id) => id,
            IdInput::Invalid => return Ok(ControlFlow::Continue(())),
            IdInput::Eof => return Ok(ControlFlow::Break(())),
        };

        let project = match self.service.fetch_project(id) {
            Ok(project) => project,
            Err(RepoError::NotFound(_)) => {
                writeln!(self.output, "Project not found")?;
                return Ok(ControlFlow::Continue(()));
            }
            Err(err) => {
                writeln!(self.output, "Error fetching project: {err}")?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        let dir = project.open_path();
        writeln!(self.output, "Changing to project path: {}", dir.display())?;
        if let Err(err) = self.opener.change_dir(&dir) {
            writeln!(self.output, "Error changing directory: {err}")?;
            return Ok(ControlFlow::Continue(()));
        }

        info!("event=project_open module=cli status=ok project_id={id}");
        // The editor writes straight to the inherited streams.
        self.output.flush()?;
        if let Err(err) = self.opener.launch_editor() {
            writeln!(self.output, "Error opening project with editor: {err}")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn list(&mut self) -> Step {
        match self.service.scan_projects() {
            Ok(rows) => {
                writeln!(self.output, "ID\tName\tPath")?;
                for row in rows {
                    match row {
                        Ok(project) => writeln!(
                            self.output,
                            "{}\t{}\t{}",
                            project.id, project.name, project.path
                        )?,
                        Err(err) => writeln!(self.output, "Error scanning row: {err}")?,
                    }
                }
            }
            Err(err) => writeln!(self.output, "Error fetching projects: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn delete(&mut self) -> Step {
        let id = match self.prompt_id()? {
            IdInput::Id(id) => id,
            IdInput::Invalid => return Ok(ControlFlow::Continue(())),
            IdInput::Eof => return Ok(ControlFlow::Break(())),
        };

        match self.service.delete_project(id) {
            Ok(count) => writeln!(self.output, "{count} project(s) deleted")?,
            Err(err) => writeln!(self.output, "Error deleting project: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn prompt_id(&mut self) -> io::Result<IdInput> {
        let Some(raw) = self.prompt(ID_PROMPT)? else {
            return Ok(IdInput::Eof);
        };
        match parse_project_id(&raw) {
            Ok(id) => Ok(IdInput::Id(id)),
            Err(err) => {
                warn!("event=id_parse module=cli status=error error={err}");
                writeln!(self.output, "Invalid ID format")?;
                Ok(IdInput::Invalid)
            }
        }
    }

    /// Prints `label`, reads one line and returns it trimmed. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD rather than failing
    /// the read, so a pasted Latin-1 path does not end the session.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("event=input_decode module=cli status=lossy bytes={}", buf.len());
        }
        Ok(Some(line.trim().to_string()))
    }
}
