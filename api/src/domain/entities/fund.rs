//! Fund names
//!
//! A fund is identified by its display name. Only names in [`FundName::KNOWN`]
//! are accepted by the services.

use serde::{Deserialize, Serialize};

pub const CUSHON_EQUITIES_FUND: &str = "Cushon Equities Fund";

/// Name of a fund product
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundName(pub String);

impl FundName {
    /// The closed set of funds offered
    pub const KNOWN: &'static [&'static str] = &[CUSHON_EQUITIES_FUND];

    pub fn cushon_equities() -> Self {
        Self(CUSHON_EQUITIES_FUND.to_string())
    }

    pub fn known() -> Vec<FundName> {
        Self::KNOWN.iter().map(|name| FundName::from(*name)).collect()
    }

    /// Membership test against the known set. Exact, case-sensitive match.
    pub fn is_valid(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FundName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for FundName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for FundName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
