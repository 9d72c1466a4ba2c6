//! # Macchanger Core
//!
//! Changes the hardware address of a network interface by driving `ifconfig`.
//!
//! * **[`changer`]**: validation and the down / set / up sequence.
//! * **[`command`]**: the external commands and the [`command::CommandRunner`] port.
//! * **[`system`]**: privilege and interface enumeration behind [`system::SystemRepository`].
//! * **[`interrupt`]**: best-effort recovery when the operator presses Ctrl-C.

pub mod changer;
pub mod command;
pub mod error;
pub mod interrupt;
pub mod system;

pub use changer::{ChangeReport, ChangeRequest, MacChanger};
pub use error::ChangerError;
