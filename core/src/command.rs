//! # Interface Commands
//!
//! The three `ifconfig` invocations that change a hardware address, and the
//! [`CommandRunner`] port that executes them.

use std::fmt;
use std::io;
use std::process::Command;

use macchanger_common::network::mac::MacAddress;
use tracing::debug;

pub const IFCONFIG: &str = "ifconfig";

/// One step of the address change sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IfconfigStep {
    Down,
    SetAddress(MacAddress),
    Up,
}

impl IfconfigStep {
    pub fn command(&self, iface: &str) -> InterfaceCommand {
        let mut args: Vec<String> = vec![iface.to_string()];
        match self {
            IfconfigStep::Down => args.push("down".into()),
            IfconfigStep::SetAddress(mac) => {
                args.extend(["hw".into(), "ether".into(), mac.to_string()]);
            }
            IfconfigStep::Up => args.push("up".into()),
        }
        InterfaceCommand {
            program: IFCONFIG.to_string(),
            args,
        }
    }
}

/// A fully resolved external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for InterfaceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status of a finished command. `code` is `None` when killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Runs an external command to completion.
///
/// Shared with the interrupt handler, hence `Send + Sync`.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &InterfaceCommand) -> io::Result<CommandStatus>;
}

/// Spawns real processes, blocking until they exit. No timeout is applied.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &InterfaceCommand) -> io::Result<CommandStatus> {
        debug!("Running {command}");
        let status = Command::new(&command.program)
            .args(&command.args)
            .status()?;
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}
