mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, change};
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);
    print::header("mac address changer", cfg.quiet);

    change::change(commands.request(), &cfg)
}
