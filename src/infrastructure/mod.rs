//! Infrastructure layer: styling and output implementations, DI container
//!
//! This layer implements the I/O boundary traits and wires up services.

pub mod di;
pub mod traits;

pub use traits::{ColoredStyler, LineSink, PlainStyler, Style, Styler, WriteSink};
