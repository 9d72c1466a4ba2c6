use pnet::datalink::{self, NetworkInterface};
use pnet::util::MacAddr;

/// Queries the operating system for its current network interfaces.
///
/// Every call performs a fresh enumeration; nothing is cached.
pub fn live_interfaces() -> Vec<NetworkInterface> {
    datalink::interfaces()
}

/// True iff `candidate` names one of the given interfaces.
pub fn is_valid_interface(candidate: &str, interfaces: &[NetworkInterface]) -> bool {
    find_interface(candidate, interfaces).is_some()
}

pub fn find_interface<'a>(
    name: &str,
    interfaces: &'a [NetworkInterface],
) -> Option<&'a NetworkInterface> {
    interfaces.iter().find(|interface| interface.name == name)
}

/// Hardware address of an interface in the same uppercase form the changer accepts.
///
/// Interfaces without a link-layer address (e.g. `tun` devices) yield `None`.
pub fn hardware_address(interface: &NetworkInterface) -> Option<String> {
    interface.mac.map(|mac: MacAddr| mac.to_string().to_ascii_uppercase())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
