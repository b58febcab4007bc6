//! Vendor-neutral DHCP management over a native server's flat record API.
//!
//! This crate owns the translation and reconciliation engine of the
//! dhcpbridge workspace:
//!
//! - **[`Provider`]** — the domain-facing facade. Queries (`subnets`,
//!   `all_hosts`, `all_leases`, `find_record*`, `unused_ip`) and
//!   mutations (`add_record`, `del_record`, `set_option_values`)
//!   composed from the [`dhcpbridge_api::DhcpApi`] primitives. Stateless
//!   and synchronous; durability lives entirely in the native server.
//!
//! - **Domain model** ([`model`]) — canonical types ([`Subnet`],
//!   [`Record`] with its [`Reservation`]/[`Lease`] variants,
//!   [`MacAddress`]) constructed fresh per query from native responses.
//!
//! - **Option codec** ([`options`]) — bidirectional mapping between
//!   named domain attributes and native (option-id, typed-value) pairs
//!   over a fixed registry; unknown codes and names are skipped, never
//!   errors.
//!
//! - **Normalizer/classifier** ([`convert`]) — resolves the "is this IP
//!   a lease or a reservation" ambiguity: reserved-IP membership wins,
//!   a present expiry makes a lease, anything else is dropped with a
//!   diagnostic.
//!
//! - **[`Error`]** — the domain taxonomy (`NotFound`, `AlreadyExists`,
//!   `Collision`, pass-through `Api`). Classification happens exactly
//!   where the ambiguity can be resolved; everywhere else native
//!   failures surface unmodified.

pub mod convert;
pub mod error;
pub mod model;
pub mod options;
pub mod provider;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::Error;
pub use options::{OptionSet, OptionValue};
pub use provider::Provider;

// Re-export model types at the crate root for ergonomics.
pub use model::{Lease, MacAddress, ManagedRange, Record, Reservation, ReservationRequest, Subnet};
