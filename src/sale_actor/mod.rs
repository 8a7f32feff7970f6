//! Ledger of completed sales.

pub mod entity;
pub mod error;

pub use error::*;
