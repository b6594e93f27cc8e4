//! Shared types used across layers.

mod patch;
mod response;
pub mod timestamp;

pub use patch::Patch;
pub use response::{Created, NoContent};
