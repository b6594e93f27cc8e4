//! API middleware.

mod error_envelope;

pub use error_envelope::{error_envelope, route_not_found};
