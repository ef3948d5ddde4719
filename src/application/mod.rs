//! Application layer: rendering and sample reports
//!
//! This layer drives the domain forest through the styling and output boundary traits.

pub mod error;
pub mod render;
pub mod reports;

pub use error::{ApplicationError, ApplicationResult};
pub use render::{replace_last, TreeRenderer};
