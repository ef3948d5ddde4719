//! Domain layer: the message forest
//!
//! This layer is independent of external concerns (no I/O, no styling, no config loading).

pub mod entities;
pub mod error;
pub mod forest;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use forest::{Forest, ForestIterator};
