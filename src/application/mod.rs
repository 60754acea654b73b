//! Application layer services implementing the proxy logic.
//!
//! This layer orchestrates gateway calls, postal code resolution and status
//! interpretation. Services consume gateway traits and provide HTTP handlers
//! with ready-to-render results.
//!
//! # Available Services
//!
//! - [`services::postal_service::PostalService`] - Postal code resolution with provider fallback
//! - [`services::resource_service::ResourceService`] - CRUD proxy for companies and suppliers
//! - [`services::association_service::AssociationService`] - Company ↔ supplier links

pub mod services;
