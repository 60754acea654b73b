//! HTTP middleware for the page router.

pub mod tracing;
