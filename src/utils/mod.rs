//! Utility functions for input normalization.
//!
//! - [`postal_code`] - Postal code (CEP) normalization and shape validation

pub mod postal_code;
