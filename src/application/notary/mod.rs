//! Notary use case module

mod receipt;
mod use_case;

pub use receipt::Receipt;
pub use use_case::Notary;
