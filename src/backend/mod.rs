//! Family-service backend access

pub mod client;
pub mod types;

pub use client::{FamilyBackend, HttpFamilyBackend};
pub use types::{PersonRecord, RelationParty, RelationshipRecord};
