//! Traits describing the resource kinds proxied to the backend.
//!
//! [`crate::application::services::ResourceService`] is generic over
//! [`Resource`]; adding a resource kind means describing its collection path,
//! its labels, its input payload and its list filter.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::entities::PostalAddress;

/// Outbound payload that carries a postal code and address fields.
pub trait AddressPayload {
    /// Postal code exactly as the user typed it.
    fn postal_code(&self) -> &str;

    /// Replaces the postal code with its canonical 8-digit form.
    fn set_postal_code(&mut self, code: String);

    /// Overrides address fields with the ones the provider supplied.
    fn apply_address(&mut self, address: &PostalAddress);

    /// Final shaping before the payload is sent.
    fn normalize(&mut self) {}
}

/// A record type owned by the backend and reachable under `/{COLLECTION}`.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Payload submitted on create and update.
    type Input: AddressPayload + Serialize + Send + Sync;

    /// Client-side list filter criteria.
    type Filter: Default + Send + Sync;

    /// Backend collection path segment.
    const COLLECTION: &'static str;

    /// Capitalized singular label used in messages ("Company").
    const TITLE: &'static str;

    /// Lowercase singular label ("company").
    const SINGULAR: &'static str;

    /// Lowercase plural label ("companies").
    const PLURAL: &'static str;

    /// Whether this record passes the filter.
    fn matches(&self, filter: &Self::Filter) -> bool;
}

/// Returns true when `needle` is empty or a case-insensitive substring of `haystack`.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
