//! Build message trees incrementally and render them as box-drawing trees.
//!
//! ```no_run
//! use msgtree::Forest;
//!
//! let (mut tree, root) = Forest::with_title("Example Tree");
//! tree.add_info(root, "I am an info branch!")?;
//! tree.add_messages(root, ["plain message", "another one"])?;
//! msgtree::print_tree(&tree)?;
//! # Ok::<(), msgtree::ApplicationError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, TreeRenderer};
pub use domain::{Category, DomainError, DomainResult, Forest, Node, NodeId, Severity};
pub use infrastructure::traits::{ColoredStyler, LineSink, PlainStyler, Style, Styler, WriteSink};

/// Render `forest` with terminal colors to standard output.
pub fn print_tree(forest: &Forest) -> ApplicationResult<()> {
    TreeRenderer::new(&ColoredStyler).render(forest, &mut WriteSink::stdout())
}
