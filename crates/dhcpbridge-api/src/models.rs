// Native record types
//
// Flat records exchanged with the native DHCP server's management API.
// The native store is one table per concern (subnets, clients, subnet
// elements, option values); nothing here carries domain semantics -- the
// core crate reconciles these into the domain model.

use std::net::Ipv4Addr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Subnet ───────────────────────────────────────────────────────────

/// A subnet descriptor from the native subnet enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetEntry {
    pub address: Ipv4Addr,
    pub mask: Ipv4Addr,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl SubnetEntry {
    pub fn new(address: Ipv4Addr, mask: Ipv4Addr) -> Self {
        Self {
            address,
            mask,
            name: None,
            comment: None,
        }
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// A client record from the native client table.
///
/// The native server keeps one flat table covering dynamic leases and
/// reserved clients alike; `lease_expires` is absent for reserved or
/// static entries. `policy` names the server-side policy that provisioned
/// the record, when one did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEntry {
    pub ip: Ipv4Addr,
    pub subnet_mask: Ipv4Addr,
    pub hardware_address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lease_expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub policy: Option<String>,
}

// ── Subnet elements ──────────────────────────────────────────────────

/// Kinds of subnet element the native enumeration can be filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubnetElementKind {
    IpRanges,
    ReservedIps,
    ExcludedIpRanges,
}

/// One element of a subnet's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubnetElement {
    IpRange { start: Ipv4Addr, end: Ipv4Addr },
    ReservedIp { ip: Ipv4Addr },
    ExcludedIpRange { start: Ipv4Addr, end: Ipv4Addr },
}

impl SubnetElement {
    /// The reserved address, when this element is a reservation.
    pub fn reserved_ip(&self) -> Option<Ipv4Addr> {
        match self {
            Self::ReservedIp { ip } => Some(*ip),
            Self::IpRange { .. } | Self::ExcludedIpRange { .. } => None,
        }
    }

    pub fn kind(&self) -> SubnetElementKind {
        match self {
            Self::IpRange { .. } => SubnetElementKind::IpRanges,
            Self::ReservedIp { .. } => SubnetElementKind::ReservedIps,
            Self::ExcludedIpRange { .. } => SubnetElementKind::ExcludedIpRanges,
        }
    }
}

// ── Option values ────────────────────────────────────────────────────

/// Native option value data-type tags.
///
/// Discriminants match the native management API's numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[repr(u8)]
pub enum OptionDataType {
    Byte = 0,
    Word = 1,
    DWord = 2,
    DWordDWord = 3,
    IpAddress = 4,
    StringData = 5,
    BinaryData = 6,
    EncapsulatedData = 7,
    Ipv6Address = 8,
}

impl TryFrom<u8> for OptionDataType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Byte),
            1 => Ok(Self::Word),
            2 => Ok(Self::DWord),
            3 => Ok(Self::DWordDWord),
            4 => Ok(Self::IpAddress),
            5 => Ok(Self::StringData),
            6 => Ok(Self::BinaryData),
            7 => Ok(Self::EncapsulatedData),
            8 => Ok(Self::Ipv6Address),
            other => Err(other),
        }
    }
}

/// One typed element of an option value. List-shaped options carry one
/// element per entry; the native representation is stringly regardless of
/// the data-type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionElement {
    pub data_type: OptionDataType,
    pub value: String,
}

/// A scope- or reservation-level option value: the option id plus its
/// typed elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValueEntry {
    pub option_id: u32,
    #[serde(default)]
    pub values: Vec<OptionElement>,
}

impl OptionValueEntry {
    /// Build an entry whose elements all share one data-type tag.
    pub fn new<I, S>(option_id: u32, data_type: OptionDataType, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            option_id,
            values: values
                .into_iter()
                .map(|value| OptionElement {
                    data_type,
                    value: value.into(),
                })
                .collect(),
        }
    }
}
