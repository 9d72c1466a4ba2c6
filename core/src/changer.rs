use std::sync::Arc;
use std::time::Duration;

use pnet::datalink::NetworkInterface;

use macchanger_common::network::interface;
use macchanger_common::network::mac::MacAddress;
use macchanger_common::{info, success};

use crate::command::{CommandRunner, IfconfigStep};
use crate::error::ChangerError;
use crate::interrupt::InterruptGuard;
use crate::system::SystemRepository;

/// How long a failed step waits for a pending Ctrl-C to be registered.
pub const INTERRUPT_GRACE: Duration = Duration::from_millis(200);

/// Operator input, already normalized to uppercase.
#[derive(Debug, Clone)]
pub struct ChangeRequest {
    pub iface: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct ChangeReport {
    pub iface: String,
    /// Address reported by the interface enumeration before the change.
    pub previous: Option<String>,
    pub current: MacAddress,
}

pub struct MacChanger<S: SystemRepository> {
    runner: Arc<dyn CommandRunner>,
    system: S,
    interrupt: Option<Arc<InterruptGuard>>,
}

impl<S: SystemRepository> MacChanger<S> {
    pub fn new(runner: Arc<dyn CommandRunner>, system: S) -> Self {
        Self {
            runner,
            system,
            interrupt: None,
        }
    }

    /// Stops the sequence and brings the interface up once `guard` is triggered.
    pub fn with_interrupt(mut self, guard: Arc<InterruptGuard>) -> Self {
        self.interrupt = Some(guard);
        self
    }

    /// Validates the request and runs `down`, `hw ether`, `up` in that order.
    ///
    /// Validation failures issue no commands. The first failing command
    /// stops the sequence, leaving the interface in whatever state it reached.
    /// An interrupt seen between steps ends the run with a single `up`.
    pub fn change_mac(&self, request: &ChangeRequest) -> Result<ChangeReport, ChangerError> {
        info!(
            "Changing {} MAC address to {}...",
            request.iface, request.address
        );

        if !self.system.is_privileged() {
            return Err(ChangerError::Permission);
        }

        let mac: MacAddress =
            MacAddress::parse(&request.address).ok_or_else(|| ChangerError::InvalidAddress {
                address: request.address.clone(),
            })?;

        let interfaces: Vec<NetworkInterface> = self.system.network_interfaces();
        if !interface::is_valid_interface(&request.iface, &interfaces) {
            return Err(ChangerError::InvalidInterface {
                iface: request.iface.clone(),
            });
        }
        let previous: Option<String> = interface::find_interface(&request.iface, &interfaces)
            .and_then(interface::hardware_address);

        for step in [
            IfconfigStep::Down,
            IfconfigStep::SetAddress(mac.clone()),
            IfconfigStep::Up,
        ] {
            self.check_interrupt()?;
            if let Err(e) = self.apply(&request.iface, &step) {
                return Err(self.interrupted_during_step().unwrap_or(e));
            }
        }
        self.check_interrupt()?;

        success!("MAC address on {} was changed successfully", request.iface);

        Ok(ChangeReport {
            iface: request.iface.clone(),
            previous,
            current: mac,
        })
    }

    fn check_interrupt(&self) -> Result<(), ChangerError> {
        match &self.interrupt {
            Some(guard) if guard.is_triggered() => Err(guard.abort()),
            _ => Ok(()),
        }
    }

    fn interrupted_during_step(&self) -> Option<ChangerError> {
        let guard = self.interrupt.as_ref()?;
        guard
            .wait_triggered(INTERRUPT_GRACE)
            .then(|| guard.abort())
    }

    fn apply(&self, iface: &str, step: &IfconfigStep) -> Result<(), ChangerError> {
        let command = step.command(iface);
        let status = self
            .runner
            .run(&command)
            .map_err(|e| ChangerError::ExternalCommand {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !status.is_success() {
            return Err(ChangerError::ExternalCommand {
                command: command.to_string(),
                reason: status.to_string(),
            });
        }
        Ok(())
    }
}
