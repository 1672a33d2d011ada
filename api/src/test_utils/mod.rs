//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall has lifetime issues with async traits taking borrowed parameters
//! - The in-memory repositories behave like the real store (not-found on
//!   update, no-op delete), so services are tested against realistic doubles
//! - We control exactly what they return without macro magic
//!
//! `server` wires the same repositories into the real router for axum-test.

pub mod fixtures;
pub mod mocks;
pub mod server;

pub use fixtures::*;
pub use mocks::*;
pub use server::*;
