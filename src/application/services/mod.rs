//! Business logic services for the application layer.

pub mod association_service;
pub mod postal_service;
pub mod resource_service;

pub use association_service::AssociationService;
pub use postal_service::PostalService;
pub use resource_service::ResourceService;

use crate::domain::entities::{Company, Supplier};

/// Resource proxy for companies.
pub type CompanyService = ResourceService<Company>;

/// Resource proxy for suppliers.
pub type SupplierService = ResourceService<Supplier>;
