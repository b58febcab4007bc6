// ── Native server call surface ──
//
// One method per native primitive the adapter composes. Implementations
// own connection handling and map their failures into `ApiError`; the
// trait itself carries no transport assumptions.

use std::net::Ipv4Addr;

use crate::error::ApiError;
use crate::models::{
    ClientEntry, OptionDataType, OptionValueEntry, SubnetElement, SubnetElementKind, SubnetEntry,
};

/// Synchronous call surface of the native DHCP server's management API.
///
/// Every call blocks until the server answers. Lookups that can
/// legitimately miss return `Ok(None)` rather than an error, so callers
/// branch on absence without suppressing failures.
pub trait DhcpApi {
    /// Enumerate every subnet the server manages.
    fn list_subnets(&self) -> Result<Vec<SubnetEntry>, ApiError>;

    /// Fetch a single subnet descriptor by its network address.
    fn get_subnet(&self, network: Ipv4Addr) -> Result<Option<SubnetEntry>, ApiError>;

    /// Enumerate scope-level option values for a subnet.
    fn list_subnet_option_values(
        &self,
        network: Ipv4Addr,
    ) -> Result<Vec<OptionValueEntry>, ApiError>;

    /// Enumerate a subnet's configuration elements of the given kind.
    fn list_subnet_elements(
        &self,
        network: Ipv4Addr,
        kind: SubnetElementKind,
    ) -> Result<Vec<SubnetElement>, ApiError>;

    /// Enumerate the client table for a subnet, leases and reserved
    /// clients alike.
    fn list_clients(&self, network: Ipv4Addr) -> Result<Vec<ClientEntry>, ApiError>;

    /// Look up the client holding an address. The native client table is
    /// keyed by IP across all subnets.
    fn get_client_by_ip(&self, ip: Ipv4Addr) -> Result<Option<ClientEntry>, ApiError>;

    /// Look up a client by hardware address within one subnet.
    fn get_client_by_mac(
        &self,
        network: Ipv4Addr,
        mac: &str,
    ) -> Result<Option<ClientEntry>, ApiError>;

    /// Ask the server for free addresses in a subnet, optionally bounded
    /// to `[from, to]`.
    fn get_free_ip(
        &self,
        network: Ipv4Addr,
        from: Option<Ipv4Addr>,
        to: Option<Ipv4Addr>,
    ) -> Result<Vec<Ipv4Addr>, ApiError>;

    /// Create a reservation binding `mac` to `ip`.
    fn create_reservation(
        &self,
        ip: Ipv4Addr,
        netmask: Ipv4Addr,
        mac: &str,
        name: &str,
    ) -> Result<(), ApiError>;

    /// Remove a reservation from the reservation table.
    fn delete_reservation(
        &self,
        ip: Ipv4Addr,
        network: Ipv4Addr,
        mac: &str,
    ) -> Result<(), ApiError>;

    /// Remove a client entry by address.
    fn delete_client_by_ip(&self, ip: Ipv4Addr) -> Result<(), ApiError>;

    /// Set one option value on a reservation.
    fn set_reserved_option_value(
        &self,
        option_id: u32,
        ip: Ipv4Addr,
        network: Ipv4Addr,
        data_type: OptionDataType,
        values: &[String],
    ) -> Result<(), ApiError>;

    /// Enumerate option values set on a reservation.
    fn list_reserved_option_values(
        &self,
        ip: Ipv4Addr,
        network: Ipv4Addr,
    ) -> Result<Vec<OptionValueEntry>, ApiError>;
}
