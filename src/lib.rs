//! # Supplier Portal
//!
//! Server-rendered front end for company and supplier management, built with
//! Axum. All records live in a backend API; this service proxies every
//! operation to it and renders the results.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, outcomes and gateway traits
//! - **Application Layer** ([`application`]) - Postal code resolution, resource
//!   proxy and association management
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest clients for the
//!   backend and the postal code providers
//! - **Web Layer** ([`web`]) - Pages, forms and the health endpoint
//!
//! ## Features
//!
//! - Company and supplier CRUD proxied to the backend
//! - Postal code validation with a fallback provider and address autofill
//! - Company ↔ supplier links
//! - Client-side supplier filtering by name and CPF/CNPJ
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE="http://localhost:8081"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::ProxyError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AssociationService, CompanyService, PostalService, SupplierService,
    };
    pub use crate::domain::entities::{Company, Link, LinkRequest, Supplier};
    pub use crate::domain::{Listing, Outcome, Severity};
    pub use crate::error::ProxyError;
    pub use crate::state::AppState;
}
