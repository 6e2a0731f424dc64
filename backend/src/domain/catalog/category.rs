//! Product line definitions.

use serde::{Deserialize, Serialize};

/// Product line a catalog entry belongs to.
///
/// Checkout only sells one line; products of any other line are rejected
/// as if the tier did not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// OmniPanel software plans.
    OmniPanel,

    /// Consulting engagements booked through sales.
    Consulting,
}

impl ProductCategory {
    /// Returns the wire tag used in provider metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::OmniPanel => "omnipanel",
            ProductCategory::Consulting => "consulting",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
