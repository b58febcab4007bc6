// ── Domain error taxonomy ──
//
// User-facing errors from dhcpbridge-core. Consumers never see raw
// native result codes for the cases the adapter can disambiguate;
// everything else surfaces as `Api`, unmodified.

use std::net::Ipv4Addr;

use thiserror::Error;

use dhcpbridge_api::ApiError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A singular lookup matched nothing. List-shaped queries report
    /// absence as an empty list instead.
    #[error("no DHCP record for {identifier}")]
    NotFound { identifier: String },

    /// The requested reservation already exists with the same hardware
    /// address. Safe to treat as success on retry.
    #[error("reservation for {ip} already exists")]
    AlreadyExists { ip: Ipv4Addr },

    /// The address is claimed under a different hardware address.
    #[error("{ip} is already in use by {mac}")]
    Collision { ip: Ipv4Addr, mac: String },

    /// A managed-range string did not parse as `network/netmask`.
    #[error("invalid managed range {0:?} (expected network/netmask)")]
    InvalidRange(String),

    /// Unclassified native or transport failure, surfaced unmodified.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub(crate) fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// `true` when the error reports absence rather than failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
