//! Domain layer: entities, outcomes and gateway contracts.
//!
//! - [`entities`] - Records and payloads exchanged with external services
//! - [`gateways`] - Traits for the backend and the postal code providers
//! - [`outcome`] - User-facing operation results
//! - [`resource`] - Traits describing proxied resource kinds

pub mod entities;
pub mod gateways;
pub mod outcome;
pub mod resource;

pub use outcome::{Listing, Outcome, Severity};
pub use resource::{AddressPayload, Resource};
