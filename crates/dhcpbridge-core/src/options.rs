// ── DHCP option codec ──
//
// Bidirectional mapping between named domain attributes and native
// (option-id, typed-value) pairs. The registry is a fixed table; option
// ids and names outside it are skipped in both directions, never
// surfaced as errors.

use std::net::Ipv4Addr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use dhcpbridge_api::{OptionDataType, OptionValueEntry};

/// Option name used to clear stale network-boot configuration on a
/// freshly created reservation.
pub const PXE_CLIENT: &str = "PXEClient";

/// Decoded value of a named DHCP option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Str(String),
    IpList(Vec<Ipv4Addr>),
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Ipv4Addr>> for OptionValue {
    fn from(ips: Vec<Ipv4Addr>) -> Self {
        Self::IpList(ips)
    }
}

/// Named options attached to a subnet or a single record, in native
/// enumeration order.
pub type OptionSet = IndexMap<String, OptionValue>;

// ── Registry ────────────────────────────────────────────────────────

/// Semantic shape of a registered option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionKind {
    Str,
    IpList,
}

struct OptionDef {
    id: u32,
    name: &'static str,
    kind: OptionKind,
}

/// Known option codes. Lookup is linear; the table is small enough that
/// anything cleverer would not pay for itself.
const REGISTRY: &[OptionDef] = &[
    OptionDef { id: 3, name: "routers", kind: OptionKind::IpList },
    OptionDef { id: 6, name: "domain_name_servers", kind: OptionKind::IpList },
    OptionDef { id: 12, name: "hostname", kind: OptionKind::Str },
    OptionDef { id: 15, name: "domain_name", kind: OptionKind::Str },
    OptionDef { id: 42, name: "ntp_servers", kind: OptionKind::IpList },
    OptionDef { id: 60, name: PXE_CLIENT, kind: OptionKind::Str },
    OptionDef { id: 66, name: "next_server", kind: OptionKind::Str },
    OptionDef { id: 67, name: "filename", kind: OptionKind::Str },
];

fn def_by_id(id: u32) -> Option<&'static OptionDef> {
    REGISTRY.iter().find(|def| def.id == id)
}

fn def_by_name(name: &str) -> Option<&'static OptionDef> {
    REGISTRY.iter().find(|def| def.name == name)
}

// ── Decode ──────────────────────────────────────────────────────────

/// Decode one native option value into a named domain attribute.
///
/// Returns `None` for option ids outside the registry, for empty value
/// lists, and for elements that do not parse into the registered shape.
pub fn decode(entry: &OptionValueEntry) -> Option<(&'static str, OptionValue)> {
    let def = def_by_id(entry.option_id)?;
    let value = match def.kind {
        OptionKind::Str => OptionValue::Str(entry.values.first()?.value.clone()),
        OptionKind::IpList => {
            let ips = entry
                .values
                .iter()
                .map(|element| element.value.parse().ok())
                .collect::<Option<Vec<Ipv4Addr>>>()?;
            if ips.is_empty() {
                return None;
            }
            OptionValue::IpList(ips)
        }
    };
    Some((def.name, value))
}

/// Decode a native option value list, keeping only registered entries,
/// in source order.
pub fn decode_all(entries: &[OptionValueEntry]) -> OptionSet {
    entries
        .iter()
        .filter_map(decode)
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}

// ── Encode ──────────────────────────────────────────────────────────

/// Encode a named attribute for a native option-set call.
///
/// Returns the option id, the native data-type tag, and the value
/// rendered as native string elements. Names outside the registry return
/// `None`. A scalar string offered for a list-shaped option becomes a
/// single-element native list.
pub fn encode(name: &str, value: &OptionValue) -> Option<(u32, OptionDataType, Vec<String>)> {
    let def = def_by_name(name)?;
    let encoded = match def.kind {
        OptionKind::Str => (
            OptionDataType::StringData,
            vec![match value {
                OptionValue::Str(s) => s.clone(),
                OptionValue::IpList(ips) => ips
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            }],
        ),
        OptionKind::IpList => (
            OptionDataType::IpAddress,
            match value {
                OptionValue::IpList(ips) => ips.iter().map(ToString::to_string).collect(),
                OptionValue::Str(s) => vec![s.clone()],
            },
        ),
    };
    Some((def.id, encoded.0, encoded.1))
}

/// Build the named option set applied to a freshly created reservation:
/// the hostname option plus caller-supplied extras, in that order.
///
/// An empty construction context instead yields a blank [`PXE_CLIENT`]
/// marker, clearing any stale network-boot options the address carries.
pub fn build_reservation_options(hostname: Option<&str>, extras: &OptionSet) -> OptionSet {
    let mut options = OptionSet::new();
    if let Some(hostname) = hostname.filter(|h| !h.is_empty()) {
        options.insert("hostname".to_owned(), OptionValue::Str(hostname.to_owned()));
    }
    for (name, value) in extras {
        options.insert(name.clone(), value.clone());
    }
    if options.is_empty() {
        options.insert(PXE_CLIENT.to_owned(), OptionValue::Str(String::new()));
    }
    options
}
