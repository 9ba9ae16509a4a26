//! Entry activation
//!
//! What a click on an entry does. Commands are opaque strings handed to a shell
//! (`sh -c <command>` by default) and spawned without waiting, so a slow command never blocks
//! the tray. Clicking Quit asks the host to exit; clicking a checkable entry toggles it.
//!
//! The spawned [`Child`] belongs to the caller, who either waits for it or hands it to
//! [`reap`]. A child that is dropped without either stays a zombie until the tray exits.

use super::assemble::TrayMenu;
use crate::config::ShellConfig;
use std::io;
use std::process::{Child, Command, ExitStatus};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ActivationError {
    #[error("no entry at {0}")]
    NotFound(String),

    #[error("entry '{0}' is disabled")]
    Disabled(String),

    #[error("entry '{0}' has no command")]
    NoCommand(String),

    #[error("cannot run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

/// Result of clicking an entry.
#[derive(Debug)]
pub enum Activation {
    /// The command was started. The caller must wait for `child` or pass it to [`reap`].
    Spawned {
        child: Child,
        /// New state of a checkable entry.
        checked: Option<bool>,
    },
    /// The Quit entry was clicked.
    Quit,
}

/// Runs entry commands through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLauncher {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ShellLauncher {
    fn default() -> Self {
        Self {
            program: "sh".to_string(),
            args: vec!["-c".to_string()],
        }
    }
}

impl From<&ShellConfig> for ShellLauncher {
    fn from(config: &ShellConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }
}

impl ShellLauncher {
    /// The process that would run `command`.
    pub fn command(&self, command: &str) -> Command {
        let mut process = Command::new(&self.program);
        process.args(&self.args).arg(command);
        process
    }

    pub fn launch(&self, command: &str) -> Result<Child, ActivationError> {
        self.command(command)
            .spawn()
            .map_err(|source| ActivationError::Spawn {
                command: command.to_string(),
                source,
            })
    }
}

/// Click the entry at `path` (submenu titles, then the entry title).
pub fn activate(
    menu: &TrayMenu,
    path: &[&str],
    launcher: &ShellLauncher,
) -> Result<Activation, ActivationError> {
    let id = menu
        .tree
        .find_entry_id(path)
        .ok_or_else(|| ActivationError::NotFound(path.join("/")))?;
    if id == menu.quit {
        return Ok(Activation::Quit);
    }

    // find_entry_id only returns ids of entries
    let entry = menu
        .tree
        .entry(id)
        .ok_or_else(|| ActivationError::NotFound(path.join("/")))?;
    if !entry.enabled {
        return Err(ActivationError::Disabled(entry.title.clone()));
    }
    let command = entry
        .command
        .as_deref()
        .ok_or_else(|| ActivationError::NoCommand(entry.title.clone()))?;

    let checked = entry.checkable.then_some(!entry.checked);
    let child = launcher.launch(command)?;
    info!(entry = %entry.title, command, pid = child.id(), "launched entry command");
    Ok(Activation::Spawned { child, checked })
}

/// Wait for `child` on a background thread so it does not linger as a zombie.
///
/// The handle yields the exit status, or `None` when waiting failed.
pub fn reap(mut child: Child) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let pid = child.id();
    thread::Builder::new()
        .name(format!("menutray-reap-{}", pid))
        .spawn(move || match child.wait() {
            Ok(status) => {
                debug!(pid, %status, "entry command finished");
                Some(status)
            }
            Err(error) => {
                warn!(pid, %error, "cannot wait for entry command");
                None
            }
        })
}
