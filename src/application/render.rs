//! Box-drawing renderer for message forests.
//!
//! Every line is `prefix + " " + text`, where the prefix is threaded down
//! the recursion and its trailing bar is rewritten into a branch or a
//! spacer depending on the node being drawn.

use std::fmt;

use itertools::{Itertools, Position};
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{Category, Forest, Node, NodeId, Severity};
use crate::infrastructure::traits::{LineSink, PlainStyler, Style, Styler};

/// Trailing bar inherited from an open ancestor branch.
pub const CONTINUATION: &str = " │";
pub const BRANCH: &str = " ├─";
pub const SPACER: &str = " │ ";
pub const CHILD_INDENT: &str = "   │";
pub const LAST_CHILD_INDENT: &str = "   └─";
pub const CLOSING_MARK: &str = "←";
pub const ROOT_PREFIX: &str = " ";

/// Replace the rightmost occurrence of `pattern` in `text`.
///
/// Returns `text` unchanged when `pattern` does not occur.
pub fn replace_last(text: &str, pattern: &str, replacement: &str) -> String {
    match text.rfind(pattern) {
        Some(pos) => {
            let mut out = String::with_capacity(text.len() + replacement.len());
            out.push_str(&text[..pos]);
            out.push_str(replacement);
            out.push_str(&text[pos + pattern.len()..]);
            out
        }
        None => text.to_string(),
    }
}

/// Renders a [`Forest`] through an injected [`Styler`] into a [`LineSink`].
pub struct TreeRenderer<'s> {
    styler: &'s dyn Styler,
}

impl<'s> TreeRenderer<'s> {
    pub fn new(styler: &'s dyn Styler) -> Self {
        Self { styler }
    }

    /// Render every root, in append order, into `sink`.
    ///
    /// The forest is only read. A child id pointing past the end of the
    /// forest aborts with [`crate::domain::DomainError::IndexOutOfRange`].
    #[instrument(level = "debug", skip_all, fields(nodes = forest.len()))]
    pub fn render(&self, forest: &Forest, sink: &mut dyn LineSink) -> ApplicationResult<()> {
        for root in forest.roots() {
            debug!("rendering root {}", root);
            self.render_node(forest, root, ROOT_PREFIX, sink)?;
        }
        Ok(())
    }

    /// Render into memory, one entry per output line.
    pub fn render_lines(&self, forest: &Forest) -> ApplicationResult<Vec<String>> {
        let mut lines = Vec::new();
        self.render(forest, &mut lines)?;
        Ok(lines)
    }

    fn render_node(
        &self,
        forest: &Forest,
        idx: NodeId,
        prefix: &str,
        sink: &mut dyn LineSink,
    ) -> ApplicationResult<()> {
        let node = forest.get(idx)?;

        match node.category() {
            Category::Break => {
                let spacer = replace_last(prefix, CONTINUATION, SPACER);
                sink.write_line(&self.structure(&spacer))?;
            }

            Category::Group => {
                let branch = replace_last(prefix, CONTINUATION, BRANCH);
                let line = format!("{} {}", self.structure(&branch), self.heading(node));
                sink.write_line(&line)?;

                let child_prefix = format!("{prefix}{CHILD_INDENT}");
                for &child in node.children() {
                    self.render_node(forest, child, &child_prefix, sink)?;
                }

                // roots are closed by the end of output
                if !node.is_root() && !node.children().is_empty() {
                    let closing = format!("{prefix}{LAST_CHILD_INDENT}");
                    let line = format!("{} {}", self.structure(&closing), CLOSING_MARK);
                    sink.write_line(&line)?;
                }
            }

            Category::MessageList => {
                for (position, message) in node.messages().iter().with_position() {
                    let line_prefix = match position {
                        Position::First | Position::Only => {
                            replace_last(prefix, CONTINUATION, BRANCH)
                        }
                        Position::Middle | Position::Last => prefix.to_string(),
                    };
                    let line = format!("{} {}", self.structure(&line_prefix), message);
                    sink.write_line(&line)?;
                }

                for (position, &child) in node.children().iter().with_position() {
                    let indent = match position {
                        Position::Last | Position::Only => LAST_CHILD_INDENT,
                        Position::First | Position::Middle => CHILD_INDENT,
                    };
                    self.render_node(forest, child, &format!("{prefix}{indent}"), sink)?;
                }
            }
        }

        Ok(())
    }

    fn structure(&self, prefix: &str) -> String {
        self.styler.paint(prefix, Style::Structure)
    }

    fn heading(&self, node: &Node) -> String {
        let message = node.messages().first().map(String::as_str).unwrap_or_default();
        match node.severity() {
            Some(severity) => format!(
                "{} {}",
                self.styler.paint(severity.label(), severity_style(severity)),
                message
            ),
            None => message.to_string(),
        }
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::Info,
        Severity::Debug => Style::Debug,
        Severity::Warn => Style::Warn,
        Severity::Error => Style::Error,
    }
}

/// Unstyled rendering, one line per row.
impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = TreeRenderer::new(&PlainStyler)
            .render_lines(self)
            .map_err(|_| fmt::Error)?;
        for line in lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;
    use crate::util::testing;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Marks styled spans so tests can see what got painted with which tag.
    struct TaggingStyler;

    impl Styler for TaggingStyler {
        fn paint(&self, text: &str, style: Style) -> String {
            format!("<{:?}>{}</>", style, text)
        }
    }

    fn plain_lines(forest: &Forest) -> Vec<String> {
        TreeRenderer::new(&PlainStyler).render_lines(forest).unwrap()
    }

    #[rstest]
    #[case("    │", " │", " ├─", "    ├─")]
    #[case("    │   │", " │", " ├─", "    │   ├─")]
    #[case(" ", " │", " ├─", " ")]
    #[case("    │", " │", " │ ", "    │ ")]
    #[case("a│b│c", "│", "+", "a│b+c")]
    fn test_replace_last(
        #[case] text: &str,
        #[case] pattern: &str,
        #[case] replacement: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(replace_last(text, pattern, replacement), expected);
    }

    #[test]
    fn test_render_single_message() {
        testing::init_test_setup();
        let (mut forest, root) = Forest::with_title("T");
        forest.add_message(root, "a").unwrap();

        assert_eq!(plain_lines(&forest), vec!["  T", "    ├─ a"]);
    }

    #[test]
    fn test_render_message_list_keeps_bar_after_first_line() {
        let (mut forest, root) = Forest::with_title("T");
        forest.add_messages(root, ["a", "b", "c"]).unwrap();

        assert_eq!(
            plain_lines(&forest),
            vec!["  T", "    ├─ a", "    │ b", "    │ c"]
        );
    }

    #[test]
    fn test_render_nested_groups_close_their_branches() {
        let (mut forest, root) = Forest::with_title("T");
        let x = forest.add_info(root, "X").unwrap();
        let y = forest.add_debug(x, "Y").unwrap();
        forest.add_warn(y, "Z").unwrap();

        assert_eq!(
            plain_lines(&forest),
            vec![
                "  T",
                "    ├─ info: X",
                "    │   ├─ debug: Y",
                "    │   │   ├─ warn: Z",
                "    │   │   └─ ←",
                "    │   └─ ←",
            ]
        );
    }

    #[test]
    fn test_render_break_between_messages() {
        let (mut forest, root) = Forest::with_title("T");
        forest.add_message(root, "a").unwrap();
        forest.add_break(root).unwrap();
        forest.add_message(root, "b").unwrap();

        assert_eq!(
            plain_lines(&forest),
            vec!["  T", "    ├─ a", "    │ ", "    ├─ b"]
        );
    }

    #[test]
    fn test_render_message_list_children_switch_on_last() {
        let (mut forest, root) = Forest::with_title("T");
        let list = forest.add_message(root, "m").unwrap();
        forest.add_message(list, "c1").unwrap();
        forest.add_message(list, "c2").unwrap();

        assert_eq!(
            plain_lines(&forest),
            vec!["  T", "    ├─ m", "    │   ├─ c1", "    ├─   └─ c2"]
        );
    }

    #[test]
    fn test_render_styles_prefix_and_labels() {
        let (mut forest, root) = Forest::with_title("T");
        let warn = forest.add_warn(root, "disk low").unwrap();
        forest.add_message(warn, "92%").unwrap();

        let lines = TreeRenderer::new(&TaggingStyler)
            .render_lines(&forest)
            .unwrap();

        assert_eq!(
            lines,
            vec![
                "<Structure> </> T",
                "<Structure>    ├─</> <Warn>warn:</> disk low",
                "<Structure>    │   ├─</> 92%",
                "<Structure>    │   └─</> ←",
            ]
        );
    }

    #[test]
    fn test_render_multiple_roots_in_append_order() {
        let (mut forest, root) = Forest::with_title("first");
        forest.add_message(root, "a").unwrap();
        let second = forest.add_root("second");
        forest.add_message(second, "b").unwrap();

        assert_eq!(
            plain_lines(&forest),
            vec!["  first", "    ├─ a", "  second", "    ├─ b"]
        );
    }

    #[test]
    fn test_render_dangling_child_is_an_error() {
        let (mut forest, root) = Forest::with_title("T");
        forest.nodes_mut()[root.index()].children.push(NodeId::new(42));

        let err = TreeRenderer::new(&PlainStyler)
            .render_lines(&forest)
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::IndexOutOfRange(idx)) if idx == NodeId::new(42)
        ));
    }

    #[test]
    fn test_display_matches_plain_rendering() {
        let (mut forest, root) = Forest::with_title("T");
        forest.add_messages(root, ["a", "b"]).unwrap();

        assert_eq!(forest.to_string(), "  T\n    ├─ a\n    │ b\n");
    }
}
