//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod direct_user_repo;
pub mod transaction_repo;


pub use direct_user_repo::PostgresDirectUserRepository;
pub use transaction_repo::PostgresTransactionRepository;
