//! Postal code lookup results.

/// Address fragment returned by a postal code provider.
///
/// Providers often return partial data; every field is optional and an
/// absent field never overrides what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddress {
    pub state: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
}

impl PostalAddress {
    /// Returns true when the provider supplied none of the fields.
    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.city.is_none() && self.neighborhood.is_none()
    }
}

/// Outcome of resolving a postal code.
///
/// `Valid` and `Unknown` are accepted; only `Invalid` blocks a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalLookupResult {
    /// A provider recognized the code.
    ///
    /// `advisory` is set when the answer came from the fallback provider.
    Valid {
        address: PostalAddress,
        advisory: Option<String>,
    },

    /// The code is malformed or a provider explicitly reported it as unknown.
    Invalid { reason: String },

    /// No provider could give an answer.
    Unknown { reason: String },
}

impl PostalLookupResult {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Invalid { .. })
    }

    /// Message to show the user alongside the result, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid { advisory, .. } => advisory.as_deref(),
            Self::Invalid { reason } | Self::Unknown { reason } => Some(reason),
        }
    }

    /// Address detail to backfill into the submitted payload.
    pub fn address(&self) -> Option<&PostalAddress> {
        match self {
            Self::Valid { address, .. } => Some(address),
            _ => None,
        }
    }
}
