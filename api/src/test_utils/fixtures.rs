//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::str::FromStr;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::entities::{DirectUser, DirectUserId, FundName, Transaction};

/// Parse a decimal literal
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Create a test direct user with default values
pub fn test_user() -> DirectUser {
    DirectUser::new("John Doe")
}

/// Create a test direct user with a specific name
pub fn test_user_named(name: &str) -> DirectUser {
    DirectUser::new(name)
}

/// Create a test transaction for a user in the Cushon Equities Fund
pub fn test_transaction(user_id: &DirectUserId) -> Transaction {
    Transaction::new(
        user_id.clone(),
        dec("25000.0000"),
        FundName::cushon_equities(),
    )
}

/// Create a test transaction with a specific amount
pub fn test_transaction_with_amount(user_id: &DirectUserId, amount: &str) -> Transaction {
    Transaction::new(user_id.clone(), dec(amount), FundName::cushon_equities())
}

/// Create a test transaction created `minutes_ago` minutes in the past
pub fn test_transaction_aged(user_id: &DirectUserId, minutes_ago: i64) -> Transaction {
    let mut tx = test_transaction(user_id);
    tx.created_at = Utc::now() - Duration::minutes(minutes_ago);
    tx.updated_at = tx.created_at;
    tx
}
