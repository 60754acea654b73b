//! Server-rendered management pages.
//!
//! GET handlers render Askama templates; POST handlers call a service and
//! redirect (303) to a page, carrying the outcome as a one-shot notice in
//! the query string.
//!
//! # Modules
//!
//! - [`dto`] - Form bodies and query parameters
//! - [`handlers`] - Page and health handlers
//! - [`middleware`] - Request tracing
//! - [`notice`] - Redirect notices
//! - [`routes`] - Page route configuration
//! - [`views`] - Display rows for templates

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod notice;
pub mod routes;
pub mod views;
