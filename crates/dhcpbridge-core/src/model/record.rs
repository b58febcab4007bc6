// ── Record domain types ──
//
// The two assignment shapes the native client table reconciles into.
// A given (subnet, ip) pair is exactly one of these at query time; the
// classifier in `convert` enforces the exclusivity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::mac::MacAddress;
use super::subnet::Subnet;
use crate::options::OptionSet;

/// A statically bound address assignment from the native reservation
/// table. No expiry; exists until deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub subnet: Subnet,
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
    pub name: String,
    pub hostname: String,
    /// `false` when the native server provisioned the reservation through
    /// a policy; such entries must be removed by the same mechanism.
    pub deleteable: bool,
    #[serde(default)]
    pub options: OptionSet,
}

/// A time-bounded dynamic address assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub subnet: Subnet,
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
    pub name: String,
    pub ends: DateTime<Utc>,
    #[serde(default)]
    pub options: OptionSet,
}

/// A DHCP record: exactly one of the two assignment shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Record {
    Reservation(Reservation),
    Lease(Lease),
}

impl Record {
    pub fn ip(&self) -> Ipv4Addr {
        match self {
            Self::Reservation(r) => r.ip,
            Self::Lease(l) => l.ip,
        }
    }

    pub fn mac(&self) -> &MacAddress {
        match self {
            Self::Reservation(r) => &r.mac,
            Self::Lease(l) => &l.mac,
        }
    }

    pub fn subnet(&self) -> &Subnet {
        match self {
            Self::Reservation(r) => &r.subnet,
            Self::Lease(l) => &l.subnet,
        }
    }
}

// ── Mutation requests ───────────────────────────────────────────────

/// Attributes for creating a reservation through
/// [`Provider::add_record`](crate::Provider::add_record).
///
/// `options` carries caller-supplied named options on top of the
/// hostname; names outside the option registry are silently skipped at
/// application time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
    pub hostname: String,
    pub network: Ipv4Addr,
    #[serde(default)]
    pub options: OptionSet,
}
