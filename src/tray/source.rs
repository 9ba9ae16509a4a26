//! Description sources
//!
//! A description is either read from a file or taken from the standard output of a command.
//! Sources are re-read every time the menu is about to be shown.

use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no description source given")]
    Missing,

    #[error("only 1 file should be given (got {0})")]
    TooManyFiles(usize),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("output of {program} is not valid UTF-8")]
    Encoding { program: String },
}

/// Where a menu description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionSource {
    File(PathBuf),
    /// A program and its arguments; the description is its standard output.
    Command { program: String, args: Vec<String> },
}

impl DescriptionSource {
    /// Interpret positional arguments: one file, or a whole command line when `command` is set.
    pub fn from_args(command: bool, mut args: Vec<String>) -> Result<Self, SourceError> {
        if args.is_empty() {
            return Err(SourceError::Missing);
        }
        if command {
            let program = args.remove(0);
            return Ok(DescriptionSource::Command { program, args });
        }
        if args.len() > 1 {
            return Err(SourceError::TooManyFiles(args.len()));
        }
        Ok(DescriptionSource::File(PathBuf::from(args.remove(0))))
    }

    /// Fetch the description text.
    pub fn read(&self) -> Result<String, SourceError> {
        match self {
            DescriptionSource::File(path) => {
                debug!(path = %path.display(), "reading menu description");
                std::fs::read_to_string(path).map_err(|source| SourceError::Read {
                    path: path.clone(),
                    source,
                })
            }
            DescriptionSource::Command { program, args } => {
                debug!(program, ?args, "running menu description command");
                let output = Command::new(program).args(args).output().map_err(|source| {
                    SourceError::Spawn {
                        program: program.clone(),
                        source,
                    }
                })?;
                if !output.status.success() {
                    return Err(SourceError::Failed {
                        program: program.clone(),
                        status: output.status,
                    });
                }
                String::from_utf8(output.stdout).map_err(|_| SourceError::Encoding {
                    program: program.clone(),
                })
            }
        }
    }
}
