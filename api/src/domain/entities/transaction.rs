//! Transaction domain entity
//!
//! A ledger entry associating a direct user, an exact decimal amount and a fund.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::direct_user::DirectUserId;
use super::fund::FundName;

/// Unique identifier for a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Digits the ledger keeps after the decimal point
pub const AMOUNT_SCALE: u32 = 4;

/// Digits the ledger keeps before the decimal point
pub const AMOUNT_INTEGER_DIGITS: u32 = 15;

/// A financial transaction into a fund
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Owning user. Never changed after creation.
    pub user_id: DirectUserId,
    /// Serialized as a string so it never round-trips through a float
    pub amount: Decimal,
    pub fund_name: FundName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction with a freshly generated ID
    pub fn new(user_id: DirectUserId, amount: Decimal, fund_name: FundName) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            user_id,
            amount,
            fund_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `amount` fits the ledger's `NUMERIC(19, 4)` column exactly.
    ///
    /// Trailing zeros don't count towards the scale, so `0.10000` fits.
    pub fn amount_fits(amount: Decimal) -> bool {
        if amount.normalize().scale() > AMOUNT_SCALE {
            return false;
        }
        amount.abs().trunc() < Decimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS))
    }

    /// Overwrite the caller-mutable fields. `id`, `user_id` and `created_at` are kept.
    pub fn apply_update(&mut self, amount: Decimal, fund_name: FundName) {
        self.amount = amount;
        self.fund_name = fund_name;
        self.updated_at = Utc::now();
    }
}
