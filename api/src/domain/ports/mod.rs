//! Domain ports (traits)
//!
//! Port traits define interfaces at the edges of the domain.
//! - `repositories`: outbound persistence, implemented by adapters
//! - `use_cases`: inbound operations, implemented by application services

pub mod repositories;
pub mod use_cases;

pub use repositories::{DirectUserRepository, TransactionRepository};
pub use use_cases::{DirectUserUseCases, TransactionUseCases};
