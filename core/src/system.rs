use is_root::is_root;
use pnet::datalink::NetworkInterface;

use macchanger_common::network::interface;

/// What the changer needs to know about the host it runs on.
pub trait SystemRepository {
    /// Whether the process may reconfigure interfaces.
    fn is_privileged(&self) -> bool;
    /// A fresh enumeration of the host's interfaces.
    fn network_interfaces(&self) -> Vec<NetworkInterface>;
}

pub struct SystemRepo;

impl SystemRepository for SystemRepo {
    fn is_privileged(&self) -> bool {
        is_root()
    }

    fn network_interfaces(&self) -> Vec<NetworkInterface> {
        interface::live_interfaces()
    }
}
