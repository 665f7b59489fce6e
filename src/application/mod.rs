//! Application Layer
//!
//! Use cases that orchestrate domain logic through the ports. This is the
//! crate's public operating surface; embedders drive the registry through
//! [`Notary`].

mod notary;

pub use notary::{Notary, Receipt};
