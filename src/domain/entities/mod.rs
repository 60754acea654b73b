//! Entities exchanged with the backend and the postal code providers.
//!
//! This layer owns no persistent state: entities are decoded from backend
//! responses or shaped into outbound payloads and then dropped.
//!
//! # Entity Types
//!
//! - [`Company`] / [`CompanyInput`] - Company record and its create/update payload
//! - [`Supplier`] / [`SupplierInput`] - Supplier record and its create/update payload
//! - [`Link`] - Company ↔ supplier association
//! - [`PostalLookupResult`] - Outcome of resolving a postal code

pub mod company;
pub mod link;
pub mod postal;
pub mod supplier;

pub use company::{Company, CompanyInput};
pub use link::{Link, LinkRequest};
pub use postal::{PostalAddress, PostalLookupResult};
pub use supplier::{PersonType, Supplier, SupplierFilter, SupplierInput};
