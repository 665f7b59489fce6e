//! Domain Services
//!
//! Stateless business logic that does not belong to a single entity.

mod settlement;

pub use settlement::Settlement;
