//! # Hardware Address
//!
//! Validation and the [`MacAddress`] value type.
//!
//! Operator input is upper-cased once at argument parsing time with
//! [`normalize`]; [`is_valid_mac_address`] itself only accepts uppercase.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static VALID_MAC_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-F0-9]{2}:){5}[A-F0-9]{2}$").expect("mac address regex compiles")
});

/// Six colon separated pairs of uppercase hex digits, e.g. `CA:FE:CA:FE:CA:FE`.
pub fn is_valid_mac_address(candidate: &str) -> bool {
    VALID_MAC_ADDRESS.is_match(candidate)
}

/// Upper-cases operator input so that `ca:fe:..` and `CA:FE:..` are equivalent.
pub fn normalize(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

/// A validated hardware address in canonical uppercase form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

impl MacAddress {
    /// Returns `None` unless `candidate` passes [`is_valid_mac_address`].
    pub fn parse(candidate: &str) -> Option<Self> {
        is_valid_mac_address(candidate).then(|| Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MacAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
