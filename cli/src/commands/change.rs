use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use colored::*;

use macchanger_common::config::Config;
use macchanger_common::{error, warn};
use macchanger_core::command::{CommandRunner, ProcessRunner};
use macchanger_core::interrupt::InterruptGuard;
use macchanger_core::system::SystemRepo;
use macchanger_core::{ChangeReport, ChangeRequest, ChangerError, MacChanger};

use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn change(request: ChangeRequest, cfg: &Config) -> ExitCode {
    let runner: Arc<dyn CommandRunner> = Arc::new(ProcessRunner);
    let guard: Arc<InterruptGuard> =
        Arc::new(InterruptGuard::new(request.iface.clone(), runner.clone()));

    if let Err(e) = install_interrupt_handler(guard.clone()) {
        warn!("{e:#}");
    }

    let changer = MacChanger::new(runner, SystemRepo).with_interrupt(guard.clone());
    let mut result = changer.change_mac(&request);

    // Interrupted while validating: no step ran, but the run still aborts.
    if guard.is_triggered() && !matches!(result, Err(ChangerError::Interrupted)) {
        result = Err(guard.abort());
    }

    match result {
        Ok(report) => {
            print_summary(&report, cfg);
            print::end_of_program(cfg.quiet);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Registers the Ctrl-C handler for this run. The handler owns the guard,
/// and with it the interface name of the active invocation.
///
/// The first Ctrl-C only marks the guard; the changer issues the `up`. A
/// second one exits immediately, for an `ifconfig` that never returns.
fn install_interrupt_handler(guard: Arc<InterruptGuard>) -> anyhow::Result<()> {
    ctrlc::set_handler(move || {
        if guard.trigger() {
            std::process::exit(i32::from(ChangerError::Interrupted.exit_code()));
        }
    })
    .context("failed to register the Ctrl-C handler")
}

fn print_summary(report: &ChangeReport, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let previous: ColoredString = match &report.previous {
        Some(mac) => mac.color(colors::MAC_ADDR),
        None => "unknown".color(colors::MAC_ADDR_UNKNOWN),
    };
    let details: Vec<Detail> = vec![
        ("Before".to_string(), previous),
        (
            "After".to_string(),
            report.current.to_string().color(colors::ACCENT).bold(),
        ),
    ];

    print::tree_head(&report.iface);
    print::as_tree_one_level(details);
}
