use thiserror::Error;

/// Terminal failures of a single run. None of them are retried.
#[derive(Debug, Error)]
pub enum ChangerError {
    #[error("You need to be root to change the MAC address")]
    Permission,

    #[error("Invalid MAC address: {address}")]
    InvalidAddress { address: String },

    #[error("Invalid iface: {iface}")]
    InvalidInterface { iface: String },

    #[error("Execution aborted by user")]
    Interrupted,

    #[error("`{command}` failed: {reason}")]
    ExternalCommand { command: String, reason: String },
}

impl ChangerError {
    /// Process exit status for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ChangerError::Permission | ChangerError::Interrupted => 1,
            ChangerError::InvalidAddress { .. } => 2,
            ChangerError::InvalidInterface { .. } => 3,
            ChangerError::ExternalCommand { .. } => 4,
        }
    }
}
