// Domain model: canonical types the provider exposes to its consumers.

pub mod mac;
pub mod record;
pub mod subnet;

pub use mac::MacAddress;
pub use record::{Lease, Record, Reservation, ReservationRequest};
pub use subnet::{ManagedRange, Subnet};
