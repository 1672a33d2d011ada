//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate input and coordinate between domain entities and ports.

pub mod direct_user_service;
pub mod transaction_service;

pub use direct_user_service::DirectUserService;
pub use transaction_service::TransactionService;
