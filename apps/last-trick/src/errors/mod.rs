//! Error handling for the Last Trick core.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
