//! `projmark` entry point.
//!
//! Startup order: configuration, file logging, store, then the command loop.
//! A store that cannot be opened is reported on stdout and ends the process
//! before the loop starts; the exit status stays 0 on every path.

use log::{error, info};
use projmark_cli::{open_store, CliConfig, Session};
use projmark_core::{
    core_version, init_logging, ProjectService, SqliteProjectRepository, SystemOpener,
};
use std::io;

fn main() {
    let config = CliConfig::from_env();

    if let Err(err) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let conn = match open_store(&config.db_path, &mut io::stdout()) {
        Ok(Some(conn)) => conn,
        Ok(None) => return,
        Err(err) => {
            error!("event=cli_start module=cli status=error error_code=io_failed error={err}");
            return;
        }
    };
    let repo = match SqliteProjectRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            error!("event=cli_start module=cli status=error error_code=repo_init_failed error={err}");
            return;
        }
    };

    let mut session = Session::new(
        ProjectService::new(repo),
        io::stdin().lock(),
        io::stdout(),
        SystemOpener::new(),
    );
    if let Err(err) = session.run() {
        // Terminal went away mid-session; nothing left to report to.
        error!("event=session_end module=cli status=error error_code=io_failed error={err}");
    }
}
