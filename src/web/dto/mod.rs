//! Request and response bodies of the web layer.

pub mod forms;
pub mod health;
pub mod query;

pub use forms::{CompanyForm, LinkForm, SupplierForm};
pub use query::{LinksQuery, NoticeQuery, SupplierFilterQuery};
