use colored::*;
use macchanger_common::SUCCESS_TARGET;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Environment variable holding the log filter, e.g. `MACCHANGER_LOG=debug`.
pub const LOG_ENV: &str = "MACCHANGER_LOG";

/// Raw terminal output, written without a status marker.
pub const PRINT_TARGET: &str = "macchanger::print";

pub struct MacchangerFormatter;

impl<S, N> FormatEvent<S, N> for MacchangerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let symbol: ColoredString = marker(meta.target(), meta.level());
            write!(writer, "{} ", symbol)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn marker(target: &str, level: &Level) -> ColoredString {
    if target == SUCCESS_TARGET {
        return "[+]".bright_green().bold();
    }
    match *level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[!]".red().bold(),
    }
}

pub fn init_logging() {
    let filter: EnvFilter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(MacchangerFormatter)
        .init();
}
