//! # Interrupt Recovery
//!
//! On Ctrl-C the interface may have been left down. The signal handler only
//! marks the [`InterruptGuard`]; the changer notices the mark between steps,
//! stops the sequence and brings the interface named by the active run back
//! up. The original hardware address is not restored.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

use macchanger_common::{error, warn};

use crate::command::{CommandRunner, IfconfigStep};
use crate::error::ChangerError;

pub struct InterruptGuard {
    iface: String,
    runner: Arc<dyn CommandRunner>,
    triggered: Mutex<bool>,
    notify: Condvar,
}

impl InterruptGuard {
    pub fn new(iface: impl Into<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            iface: iface.into(),
            runner,
            triggered: Mutex::new(false),
            notify: Condvar::new(),
        }
    }

    pub fn iface(&self) -> &str {
        &self.iface
    }

    /// Marks the run as interrupted. Returns `true` if it already was.
    ///
    /// Safe to call from the signal handler thread; issues no commands.
    pub fn trigger(&self) -> bool {
        let mut triggered = self.triggered.lock().unwrap_or_else(PoisonError::into_inner);
        let already: bool = *triggered;
        *triggered = true;
        self.notify.notify_all();
        already
    }

    pub fn is_triggered(&self) -> bool {
        *self.triggered.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Waits up to `grace` for [`trigger`](Self::trigger).
    ///
    /// SIGINT reaches the running `ifconfig` child too, so a failed step can
    /// be observed before the handler thread has marked the guard.
    pub fn wait_triggered(&self, grace: Duration) -> bool {
        let triggered = self.triggered.lock().unwrap_or_else(PoisonError::into_inner);
        let (triggered, _) = self
            .notify
            .wait_timeout_while(triggered, grace, |triggered| !*triggered)
            .unwrap_or_else(PoisonError::into_inner);
        *triggered
    }

    /// Issues a best-effort `up` and returns the error the process should exit with.
    ///
    /// The interface name is not validated again.
    pub fn abort(&self) -> ChangerError {
        error!("Aborting execution...");
        let command = IfconfigStep::Up.command(&self.iface);
        match self.runner.run(&command) {
            Ok(status) if !status.is_success() => warn!("`{command}` returned {status}"),
            Err(e) => warn!("`{command}` could not be started: {e}"),
            Ok(_) => {}
        }
        ChangerError::Interrupted
    }
}
