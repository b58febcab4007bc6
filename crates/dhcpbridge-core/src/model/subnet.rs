// ── Subnet domain types ──

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::Error;
use crate::options::OptionSet;

/// A DHCP scope: identified by network address and mask, carrying its
/// decoded scope-level options.
///
/// Immutable once constructed. Equality and hashing use the
/// `(network, netmask)` identity only -- two views of the same scope are
/// the same subnet whatever options each copy happens to carry.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Subnet {
    pub network: Ipv4Addr,
    pub netmask: Ipv4Addr,
    #[serde(default)]
    pub options: OptionSet,
}

impl Subnet {
    pub fn new(network: Ipv4Addr, netmask: Ipv4Addr) -> Self {
        Self {
            network,
            netmask,
            options: OptionSet::new(),
        }
    }

    pub fn with_options(network: Ipv4Addr, netmask: Ipv4Addr, options: OptionSet) -> Self {
        Self {
            network,
            netmask,
            options,
        }
    }
}

impl PartialEq for Subnet {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network && self.netmask == other.netmask
    }
}

impl Hash for Subnet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.network.hash(state);
        self.netmask.hash(state);
    }
}

// ── Managed ranges ──────────────────────────────────────────────────

/// One `network/netmask` pair a provider instance exposes. Native subnets
/// that match no managed range are invisible through every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedRange {
    pub network: Ipv4Addr,
    pub netmask: Ipv4Addr,
}

impl ManagedRange {
    /// Exact match on network address and mask. No CIDR-overlap logic.
    pub fn matches(&self, network: Ipv4Addr, netmask: Ipv4Addr) -> bool {
        self.network == network && self.netmask == netmask
    }
}

impl FromStr for ManagedRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidRange(s.to_owned());
        let (network, netmask) = s.split_once('/').ok_or_else(invalid)?;
        Ok(Self {
            network: network.trim().parse().map_err(|_| invalid())?,
            netmask: netmask.trim().parse().map_err(|_| invalid())?,
        })
    }
}
