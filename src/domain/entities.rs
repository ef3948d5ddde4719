//! Domain entities: node identity, categories and severities

use std::fmt;

/// Permanent identity of a node: its position in the forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of node, decides how the renderer draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Labeled branch; the first message is the heading.
    Group,
    /// One or more plain lines at the same tree position.
    MessageList,
    /// Blank spacer line that keeps ancestor bars visible.
    Break,
}

/// Severity label attached to groups created by the `add_info`-style helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Debug,
    Warn,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info:",
            Severity::Debug => "debug:",
            Severity::Warn => "warn:",
            Severity::Error => "error:",
        }
    }
}

/// A single node of the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) category: Category,
    pub(crate) messages: Vec<String>,
    pub(crate) severity: Option<Severity>,
    /// `None` for root nodes
    pub(crate) parent: Option<NodeId>,
    /// Append order is render order
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(category: Category, parent: Option<NodeId>, messages: Vec<String>) -> Self {
        Self {
            category,
            messages,
            severity: None,
            parent,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Severity::Info, "info:")]
    #[case(Severity::Debug, "debug:")]
    #[case(Severity::Warn, "warn:")]
    #[case(Severity::Error, "error:")]
    fn test_severity_label(#[case] severity: Severity, #[case] label: &str) {
        assert_eq!(severity.label(), label);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(3).to_string(), "#3");
        assert_eq!(NodeId::from(7).index(), 7);
    }
}
