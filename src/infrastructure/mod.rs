//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete HTTP implementations for the backend and postal code gateways.
//!
//! # Modules
//!
//! - [`http`] - reqwest-based gateway implementations

pub mod http;
