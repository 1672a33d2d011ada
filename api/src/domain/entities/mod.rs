//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod direct_user;
pub mod fund;
pub mod transaction;

pub use direct_user::{DirectUser, DirectUserId};
pub use fund::FundName;
pub use transaction::{Transaction, TransactionId, AMOUNT_INTEGER_DIGITS, AMOUNT_SCALE};
