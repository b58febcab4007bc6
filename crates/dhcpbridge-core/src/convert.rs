// ── Native-to-domain conversions ──
//
// Bridges raw `dhcpbridge_api` records into `dhcpbridge_core::model`
// domain types. Classification between reservation and lease happens
// here: reserved-IP membership wins, a present expiry makes a lease,
// anything else has no domain representation and is dropped.

use std::collections::HashSet;
use std::net::Ipv4Addr;

use tracing::debug;

use dhcpbridge_api::{ClientEntry, OptionValueEntry, SubnetElement, SubnetEntry};

use crate::model::{Lease, MacAddress, Record, Reservation, Subnet};
use crate::options::{OptionSet, decode_all};

/// Convert a native subnet descriptor, attaching its decoded scope
/// options.
pub fn subnet_with_options(entry: &SubnetEntry, option_values: &[OptionValueEntry]) -> Subnet {
    Subnet::with_options(entry.address, entry.mask, decode_all(option_values))
}

/// Collect the reserved addresses out of a subnet element enumeration.
pub fn reserved_ip_set(elements: &[SubnetElement]) -> HashSet<Ipv4Addr> {
    elements.iter().filter_map(SubnetElement::reserved_ip).collect()
}

/// Normalize one native client record against its subnet context.
///
/// An address in the reserved set is a [`Reservation`] whatever its
/// expiry says; otherwise a present expiry makes a [`Lease`]. A record
/// with neither is a transient client the native server has not fully
/// committed -- it is dropped, with a diagnostic, rather than guessed at.
pub fn client_to_record(
    subnet: &Subnet,
    reserved_ips: &HashSet<Ipv4Addr>,
    client: &ClientEntry,
    options: OptionSet,
) -> Option<Record> {
    let mac = MacAddress::new(&client.hardware_address);

    if reserved_ips.contains(&client.ip) {
        return Some(Record::Reservation(Reservation {
            subnet: subnet.clone(),
            ip: client.ip,
            mac,
            name: client.name.clone(),
            hostname: client.name.clone(),
            deleteable: client.policy.is_none(),
            options,
        }));
    }

    match client.lease_expires {
        Some(ends) => Some(Record::Lease(Lease {
            subnet: subnet.clone(),
            ip: client.ip,
            mac,
            name: client.name.clone(),
            ends,
            options,
        })),
        None => {
            debug!(
                ip = %client.ip,
                mac = %client.hardware_address,
                "client record carries no expiry and no reservation; dropping"
            );
            None
        }
    }
}
