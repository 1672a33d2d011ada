//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for inbound use cases and outbound persistence

pub mod entities;
pub mod ports;
