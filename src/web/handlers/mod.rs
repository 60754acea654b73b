//! Page handlers: render templates on GET, redirect with a notice on POST.

mod companies;
mod health;
mod links;
mod suppliers;

pub use companies::{
    create_company_handler, delete_company_handler, edit_company_handler,
    list_companies_handler, update_company_handler,
};
pub use health::health_handler;
pub use links::{link_handler, links_handler, unlink_handler};
pub use suppliers::{
    create_supplier_handler, delete_supplier_handler, edit_supplier_handler,
    list_suppliers_handler, update_supplier_handler,
};
