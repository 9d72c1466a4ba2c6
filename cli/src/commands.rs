pub mod change;

use clap::{ArgAction, Parser};
use macchanger_common::config::Config;
use macchanger_common::network::mac;
use macchanger_core::ChangeRequest;

#[derive(Parser, Debug)]
#[command(name = "macchanger")]
#[command(about = "MAC address changer")]
#[command(version)]
pub struct CommandLine {
    /// Interface to change the MAC address. Ex: -i eth0 | --iface eth0
    #[arg(short, long)]
    pub iface: String,
    /// New MAC address. Ex: -m CA:FE:CA:FE:CA:FE | --mac CA:FE:CA:FE:CA:FE
    #[arg(short, long, value_parser = parse_mac)]
    pub mac: String,
    /// Reduce output (-q hides banner and headers, -qq also hides the summary)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }

    pub fn request(&self) -> ChangeRequest {
        ChangeRequest {
            iface: self.iface.clone(),
            address: self.mac.clone(),
        }
    }
}

/// Addresses are case-insensitive on input; validation happens later.
fn parse_mac(raw: &str) -> Result<String, String> {
    Ok(mac::normalize(raw))
}
