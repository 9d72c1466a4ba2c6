//! Fakes for driving `MacChanger` without touching real interfaces.

use std::io;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use macchanger_core::command::{CommandRunner, CommandStatus, InterfaceCommand};
use macchanger_core::interrupt::InterruptGuard;
use macchanger_core::system::SystemRepository;
use pnet::datalink::{MacAddr, NetworkInterface};

/// Records every command instead of running it.
///
/// Optionally fails the command whose rendered form matches `fail_on`,
/// and can deliver a Ctrl-C while a given command runs.
#[derive(Default)]
pub struct RecordingRunner {
    issued: Mutex<Vec<String>>,
    fail_on: Option<(String, FailureMode)>,
    interrupt_on: Mutex<Option<(String, Arc<InterruptGuard>, Delivery)>>,
}

/// How a Ctrl-C reaches the run.
#[derive(Clone, Copy)]
pub enum Delivery {
    /// The handler marks the guard before the command returns; the command succeeds.
    AfterCommand,
    /// The command is killed by the signal and the handler thread marks the
    /// guard only after the changer has seen the failure.
    KillsCommand { handler_delay: Duration },
}

#[derive(Clone, Copy)]
pub enum FailureMode {
    NonZeroExit,
    SpawnError,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(command: &str, mode: FailureMode) -> Self {
        Self {
            fail_on: Some((command.to_string(), mode)),
            ..Self::default()
        }
    }

    /// Triggers `guard` when `command` is issued.
    pub fn interrupt_on(&self, command: &str, guard: Arc<InterruptGuard>, delivery: Delivery) {
        *self.interrupt_on.lock().unwrap() = Some((command.to_string(), guard, delivery));
    }

    pub fn issued(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &InterfaceCommand) -> io::Result<CommandStatus> {
        let rendered: String = command.to_string();
        self.issued.lock().unwrap().push(rendered.clone());

        let interrupt = self.interrupt_on.lock().unwrap().take_if(|(target, _, _)| *target == rendered);
        if let Some((_, guard, delivery)) = interrupt {
            match delivery {
                Delivery::AfterCommand => {
                    guard.trigger();
                }
                Delivery::KillsCommand { handler_delay } => {
                    thread::spawn(move || {
                        thread::sleep(handler_delay);
                        guard.trigger();
                    });
                    return Ok(CommandStatus { code: None });
                }
            }
        }

        match &self.fail_on {
            Some((target, FailureMode::NonZeroExit)) if *target == rendered => {
                Ok(CommandStatus { code: Some(255) })
            }
            Some((target, FailureMode::SpawnError)) if *target == rendered => Err(
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            ),
            _ => Ok(CommandStatus::success()),
        }
    }
}

pub struct FakeSystem {
    pub privileged: bool,
    pub interfaces: Vec<NetworkInterface>,
}

impl FakeSystem {
    pub fn root() -> Self {
        Self {
            privileged: true,
            interfaces: default_interfaces(),
        }
    }

    pub fn unprivileged() -> Self {
        Self {
            privileged: false,
            interfaces: default_interfaces(),
        }
    }
}

impl SystemRepository for FakeSystem {
    fn is_privileged(&self) -> bool {
        self.privileged
    }

    fn network_interfaces(&self) -> Vec<NetworkInterface> {
        self.interfaces.clone()
    }
}

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: vec![],
        flags,
    }
}

pub fn default_interfaces() -> Vec<NetworkInterface> {
    vec![
        ni("lo", 1, Some(MacAddr::new(0, 0, 0, 0, 0, 0)), 65609),
        ni(
            "enp9s0",
            2,
            Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
            69699,
        ),
        ni(
            "wlan0",
            3,
            Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
            69699,
        ),
        ni("tun0", 5, None, 69841),
    ]
}
