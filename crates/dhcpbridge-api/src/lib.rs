//! Native DHCP server boundary for the dhcpbridge workspace.
//!
//! This crate defines the seam between the vendor-neutral core and a
//! concrete native DHCP server:
//!
//! - **[`DhcpApi`]** — the synchronous call surface a native connection
//!   must provide: subnet/client/element/option enumeration, point
//!   lookups, free-address search, and reservation mutations.
//! - **Flat record types** ([`models`]) — the native store's own shapes
//!   (`SubnetEntry`, `ClientEntry`, `SubnetElement`, `OptionValueEntry`),
//!   deliberately free of domain semantics.
//! - **[`ApiError`]** — native result codes and transport failures, which
//!   `dhcpbridge-core` translates into its domain taxonomy.
//!
//! Connection management, authentication, and the wire protocol belong to
//! the implementation of [`DhcpApi`], not to this crate.

pub mod api;
pub mod error;
pub mod models;

// ── Primary re-exports ──────────────────────────────────────────────
pub use api::DhcpApi;
pub use error::{ApiError, ERR_RESERVED_IP_EXISTS};
pub use models::{
    ClientEntry, OptionDataType, OptionElement, OptionValueEntry, SubnetElement,
    SubnetElementKind, SubnetEntry,
};
