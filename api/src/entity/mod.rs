//! SeaORM entities
//!
//! Table models for the PostgreSQL adapters. Schema lives in `migrations/`.

pub mod direct_users;
pub mod transactions;
