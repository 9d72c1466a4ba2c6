//! # Macchanger Common
//!
//! Types shared between the changer core and the command line front end.
//!
//! * **[`network`]**: hardware address parsing and interface lookup.
//! * **[`config`]**: runtime options collected from the command line.

pub mod config;
pub mod network;

pub use tracing;

/// Tracing target of [`success!`] events.
pub const SUCCESS_TARGET: &str = "macchanger::success";

/// Logs a progress message through the active subscriber.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Logs a completed action. Rendered with emphasis by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
