// ── Provider ──
//
// The domain-facing facade: query and mutation engines composed from the
// native call surface. Stateless -- every operation issues fresh native
// calls and returns owned domain values; nothing is cached between
// calls, and callers needing check-then-act atomicity must serialize
// externally.

use std::collections::HashSet;
use std::net::Ipv4Addr;

use tracing::{debug, warn};

use dhcpbridge_api::{ApiError, ClientEntry, DhcpApi, SubnetElementKind};

use crate::convert;
use crate::error::Error;
use crate::model::{Lease, MacAddress, ManagedRange, Record, Reservation, ReservationRequest, Subnet};
use crate::options::{OptionSet, build_reservation_options, decode_all, encode};

/// Vendor-neutral DHCP provider backed by a native server connection.
///
/// Construction takes the native connection handle, the managed
/// `network/netmask` ranges, and the free-address search flag. Subnets
/// outside the managed ranges are invisible through every query.
#[derive(Debug)]
pub struct Provider<A> {
    api: A,
    managed: Vec<ManagedRange>,
    restrict_free_ip_range: bool,
}

impl<A: DhcpApi> Provider<A> {
    /// Build a provider over a native connection.
    ///
    /// `managed_subnets` holds `network/netmask` strings. When
    /// `restrict_free_ip_range` is set, [`unused_ip`](Self::unused_ip)
    /// forwards its caller-supplied bounds to the native free-address
    /// search; otherwise the whole scope is searched.
    pub fn new<S: AsRef<str>>(
        api: A,
        managed_subnets: &[S],
        restrict_free_ip_range: bool,
    ) -> Result<Self, Error> {
        let managed = managed_subnets
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            api,
            managed,
            restrict_free_ip_range,
        })
    }

    /// The native connection handle.
    pub fn api(&self) -> &A {
        &self.api
    }

    fn is_managed(&self, network: Ipv4Addr, netmask: Ipv4Addr) -> bool {
        self.managed.iter().any(|range| range.matches(network, netmask))
    }

    /// Reserved addresses of a subnet, from its element enumeration.
    fn reserved_ips(&self, network: Ipv4Addr) -> Result<HashSet<Ipv4Addr>, Error> {
        let elements = self
            .api
            .list_subnet_elements(network, SubnetElementKind::ReservedIps)?;
        Ok(convert::reserved_ip_set(&elements))
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Enumerate the managed subnets, with decoded scope options
    /// attached, in native enumeration order.
    pub fn subnets(&self) -> Result<Vec<Subnet>, Error> {
        let mut subnets = Vec::new();
        for entry in self.api.list_subnets()? {
            if !self.is_managed(entry.address, entry.mask) {
                debug!(network = %entry.address, "skipping unmanaged subnet");
                continue;
            }
            let option_values = self.api.list_subnet_option_values(entry.address)?;
            subnets.push(convert::subnet_with_options(&entry, &option_values));
        }
        Ok(subnets)
    }

    /// All reservations in a subnet. Leases in the underlying client
    /// table are filtered out.
    pub fn all_hosts(&self, network: Ipv4Addr) -> Result<Vec<Reservation>, Error> {
        let reserved = self.reserved_ips(network)?;
        let mut hosts = Vec::new();
        for client in self.api.list_clients(network)? {
            let subnet = Subnet::new(network, client.subnet_mask);
            if let Some(Record::Reservation(host)) =
                convert::client_to_record(&subnet, &reserved, &client, OptionSet::new())
            {
                hosts.push(host);
            }
        }
        Ok(hosts)
    }

    /// All leases in a subnet. Reserved clients are filtered out.
    pub fn all_leases(&self, network: Ipv4Addr) -> Result<Vec<Lease>, Error> {
        let reserved = self.reserved_ips(network)?;
        let mut leases = Vec::new();
        for client in self.api.list_clients(network)? {
            let subnet = Subnet::new(network, client.subnet_mask);
            if let Some(Record::Lease(lease)) =
                convert::client_to_record(&subnet, &reserved, &client, OptionSet::new())
            {
                leases.push(lease);
            }
        }
        Ok(leases)
    }

    /// Classify a native client record and attach options from the
    /// variant's source: reservations carry their per-host option store,
    /// leases inherit the scope defaults.
    fn resolve_client(
        &self,
        network: Ipv4Addr,
        client: &ClientEntry,
    ) -> Result<Option<Record>, Error> {
        let reserved = self.reserved_ips(network)?;
        let option_values = if reserved.contains(&client.ip) {
            self.api.list_reserved_option_values(client.ip, network)?
        } else {
            self.api.list_subnet_option_values(network)?
        };
        let subnet = Subnet::new(network, client.subnet_mask);
        Ok(convert::client_to_record(
            &subnet,
            &reserved,
            client,
            decode_all(&option_values),
        ))
    }

    /// Look up the record holding `ip`, or fail with
    /// [`Error::NotFound`].
    pub fn find_record(&self, network: Ipv4Addr, ip: Ipv4Addr) -> Result<Record, Error> {
        let Some(client) = self.api.get_client_by_ip(ip)? else {
            return Err(Error::not_found(format!("{network}/{ip}")));
        };
        self.resolve_client(network, &client)?
            .ok_or_else(|| Error::not_found(format!("{network}/{ip}")))
    }

    /// Like [`find_record`](Self::find_record), but list-shaped: absence
    /// is an empty list, never an error.
    pub fn find_records_by_ip(
        &self,
        network: Ipv4Addr,
        ip: Ipv4Addr,
    ) -> Result<Vec<Record>, Error> {
        match self.api.get_client_by_ip(ip)? {
            Some(client) => Ok(self.resolve_client(network, &client)?.into_iter().collect()),
            None => Ok(Vec::new()),
        }
    }

    /// Look up the record held by `mac` within a subnet, or fail with
    /// [`Error::NotFound`].
    pub fn find_record_by_mac(
        &self,
        network: Ipv4Addr,
        mac: &MacAddress,
    ) -> Result<Record, Error> {
        let Some(client) = self.api.get_client_by_mac(network, mac.as_str())? else {
            return Err(Error::not_found(format!("{network}/{mac}")));
        };
        self.resolve_client(network, &client)?
            .ok_or_else(|| Error::not_found(format!("{network}/{mac}")))
    }

    /// An address the subnet can hand to `mac`.
    ///
    /// A client the native server already knows keeps its address. The
    /// optimistic lookup treats failure as "no existing assignment" --
    /// the one place a native error is deliberately swallowed -- and
    /// falls through to a fresh free-address request.
    pub fn unused_ip(
        &self,
        subnet: &Subnet,
        mac: &MacAddress,
        from: Option<Ipv4Addr>,
        to: Option<Ipv4Addr>,
    ) -> Result<Ipv4Addr, Error> {
        match self.api.get_client_by_mac(subnet.network, mac.as_str()) {
            Ok(Some(existing)) => return Ok(existing.ip),
            Ok(None) => {}
            Err(e) => {
                debug!(mac = %mac, error = %e, "optimistic client lookup failed; requesting a fresh address");
            }
        }

        let (from, to) = if self.restrict_free_ip_range {
            (from, to)
        } else {
            (None, None)
        };
        let free = self.api.get_free_ip(subnet.network, from, to)?;
        free.first()
            .copied()
            .ok_or_else(|| Error::not_found(format!("free address in {}", subnet.network)))
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Create a reservation and apply its option set: the hostname plus
    /// any caller-supplied extras.
    pub fn add_record(&self, request: &ReservationRequest) -> Result<(), Error> {
        let netmask = self
            .api
            .get_subnet(request.network)?
            .map(|subnet| subnet.mask)
            .ok_or_else(|| Error::not_found(request.network.to_string()))?;

        self.create_reservation(request.ip, netmask, &request.mac, &request.hostname)?;

        let options = build_reservation_options(Some(&request.hostname), &request.options);
        self.set_option_values(request.ip, request.network, &options)
    }

    /// Create the native reservation, translating the duplicate result
    /// code into the domain taxonomy.
    ///
    /// The native code alone cannot tell "already done" from "address
    /// taken by someone else"; a follow-up lookup of the conflicting
    /// client decides. When that lookup cannot resolve the ambiguity the
    /// native error surfaces unmodified.
    pub fn create_reservation(
        &self,
        ip: Ipv4Addr,
        netmask: Ipv4Addr,
        mac: &MacAddress,
        name: &str,
    ) -> Result<(), Error> {
        match self.api.create_reservation(ip, netmask, mac.as_str(), name) {
            Ok(()) => Ok(()),
            Err(e) if e.is_duplicate_reservation() => Err(self.classify_duplicate(ip, mac, e)),
            Err(e) => Err(e.into()),
        }
    }

    fn classify_duplicate(&self, ip: Ipv4Addr, mac: &MacAddress, original: ApiError) -> Error {
        match self.api.get_client_by_ip(ip) {
            Ok(Some(existing)) => {
                let existing_mac = MacAddress::new(&existing.hardware_address);
                if existing_mac == *mac {
                    Error::AlreadyExists { ip }
                } else {
                    Error::Collision {
                        ip,
                        mac: existing_mac.to_string(),
                    }
                }
            }
            Ok(None) | Err(_) => {
                warn!(%ip, "duplicate reservation reported but the conflicting client is unresolvable");
                Error::Api(original)
            }
        }
    }

    /// Delete a record. Reservations are removed from the reservation
    /// table by ip, network, and mac; leases from the globally keyed
    /// client table by ip alone.
    pub fn del_record(&self, record: &Record) -> Result<(), Error> {
        match record {
            Record::Reservation(host) => {
                self.api
                    .delete_reservation(host.ip, host.subnet.network, host.mac.as_str())?;
            }
            Record::Lease(lease) => self.api.delete_client_by_ip(lease.ip)?,
        }
        Ok(())
    }

    /// Apply named options to a reservation, one native call per
    /// registered option. Unregistered names are skipped: option
    /// application is best-effort by contract.
    pub fn set_option_values(
        &self,
        ip: Ipv4Addr,
        network: Ipv4Addr,
        options: &OptionSet,
    ) -> Result<(), Error> {
        for (name, value) in options {
            let Some((option_id, data_type, values)) = encode(name, value) else {
                debug!(option = %name, "skipping unregistered option");
                continue;
            };
            debug!(option = %name, id = option_id, data_type = %data_type, "applying reservation option");
            self.api
                .set_reserved_option_value(option_id, ip, network, data_type, &values)?;
        }
        Ok(())
    }
}
