use tracing::instrument;

use crate::domain::entities::{Category, Node, NodeId, Severity};
use crate::domain::error::{DomainError, DomainResult};

/// Append-only, index-addressed collection of message trees.
///
/// A node's position is its identity; ids are handed out sequentially and
/// never reused. Several roots may coexist and render in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    nodes: Vec<Node>,
}

impl Forest {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a forest holding a single titled root group.
    ///
    /// Returns the forest and the id of that root, which is where
    /// callers normally start attaching nodes.
    pub fn with_title(title: impl Into<String>) -> (Self, NodeId) {
        let mut forest = Self::new();
        let root = forest.add_root(title);
        (forest, root)
    }

    /// Validates the parent, appends a node and registers it with its parent.
    ///
    /// Fails without touching the forest if `parent` is not present yet
    /// or if `messages` is empty.
    #[instrument(level = "trace", skip(self, messages))]
    pub fn insert(
        &mut self,
        category: Category,
        parent: Option<NodeId>,
        messages: Vec<String>,
    ) -> DomainResult<NodeId> {
        self.attach(Node::new(category, parent, messages))
    }

    fn attach(&mut self, node: Node) -> DomainResult<NodeId> {
        if let Some(parent) = node.parent {
            if parent.index() >= self.nodes.len() {
                return Err(DomainError::DanglingParent {
                    parent,
                    len: self.nodes.len(),
                });
            }
        }
        if node.messages.is_empty() {
            return Err(DomainError::EmptyMessages);
        }
        match node.category {
            Category::Group if node.messages.len() != 1 => {
                return Err(DomainError::MalformedNode {
                    category: node.category,
                    reason: "a group carries exactly one heading message",
                });
            }
            Category::Break if node.messages.len() != 1 || !node.messages[0].is_empty() => {
                return Err(DomainError::MalformedNode {
                    category: node.category,
                    reason: "a break carries a single empty message",
                });
            }
            _ => {}
        }

        let node_idx = NodeId::new(self.nodes.len());
        if let Some(parent) = node.parent {
            self.nodes[parent.index()].children.push(node_idx);
        }
        self.nodes.push(node);

        Ok(node_idx)
    }

    /// Appends another independent root group.
    pub fn add_root(&mut self, title: impl Into<String>) -> NodeId {
        let node_idx = NodeId::new(self.nodes.len());
        self.nodes
            .push(Node::new(Category::Group, None, vec![title.into()]));
        node_idx
    }

    pub fn add_group(&mut self, parent: NodeId, message: impl Into<String>) -> DomainResult<NodeId> {
        self.insert(Category::Group, Some(parent), vec![message.into()])
    }

    pub fn add_info(&mut self, parent: NodeId, message: impl Into<String>) -> DomainResult<NodeId> {
        self.add_labeled(Severity::Info, parent, message.into())
    }

    pub fn add_debug(&mut self, parent: NodeId, message: impl Into<String>) -> DomainResult<NodeId> {
        self.add_labeled(Severity::Debug, parent, message.into())
    }

    pub fn add_warn(&mut self, parent: NodeId, message: impl Into<String>) -> DomainResult<NodeId> {
        self.add_labeled(Severity::Warn, parent, message.into())
    }

    pub fn add_error(&mut self, parent: NodeId, message: impl Into<String>) -> DomainResult<NodeId> {
        self.add_labeled(Severity::Error, parent, message.into())
    }

    fn add_labeled(
        &mut self,
        severity: Severity,
        parent: NodeId,
        message: String,
    ) -> DomainResult<NodeId> {
        self.attach(Node::new(Category::Group, Some(parent), vec![message]).with_severity(severity))
    }

    pub fn add_message(&mut self, parent: NodeId, message: impl Into<String>) -> DomainResult<NodeId> {
        self.insert(Category::MessageList, Some(parent), vec![message.into()])
    }

    pub fn add_messages<I, S>(&mut self, parent: NodeId, messages: I) -> DomainResult<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages = messages.into_iter().map(Into::into).collect();
        self.insert(Category::MessageList, Some(parent), messages)
    }

    pub fn add_break(&mut self, parent: NodeId) -> DomainResult<NodeId> {
        self.insert(Category::Break, Some(parent), vec![String::new()])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, idx: NodeId) -> DomainResult<&Node> {
        self.nodes
            .get(idx.index())
            .ok_or(DomainError::IndexOutOfRange(idx))
    }

    /// Root ids in append order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_root())
            .map(|(idx, _)| NodeId::new(idx))
    }

    /// Pre-order traversal over every root, in render order.
    ///
    /// Yields an error and stops if a child id points past the end.
    pub fn iter(&self) -> ForestIterator<'_> {
        ForestIterator::new(self)
    }

    /// Longest root-to-leaf chain across all roots, counted in nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> DomainResult<usize> {
        let mut deepest = 0;
        for root in self.roots() {
            deepest = deepest.max(self.calculate_depth(root)?);
        }
        Ok(deepest)
    }

    fn calculate_depth(&self, node_idx: NodeId) -> DomainResult<usize> {
        let node = self.get(node_idx)?;
        let mut deepest_child = 0;
        for &child in &node.children {
            deepest_child = deepest_child.max(self.calculate_depth(child)?);
        }
        Ok(1 + deepest_child)
    }

    /// Ids of all nodes without children, in pre-order.
    pub fn leaf_nodes(&self) -> DomainResult<Vec<NodeId>> {
        let mut leaves = Vec::new();
        for entry in self.iter() {
            let (idx, node) = entry?;
            if node.children.is_empty() {
                leaves.push(idx);
            }
        }
        Ok(leaves)
    }

    #[cfg(test)]
    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }
}

pub struct ForestIterator<'a> {
    forest: &'a Forest,
    stack: Vec<NodeId>,
}

impl<'a> ForestIterator<'a> {
    fn new(forest: &'a Forest) -> Self {
        let mut stack: Vec<NodeId> = forest.roots().collect();
        stack.reverse();
        Self { forest, stack }
    }
}

impl<'a> Iterator for ForestIterator<'a> {
    type Item = DomainResult<(NodeId, &'a Node)>;

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        match self.forest.get(current_idx) {
            Ok(node) => {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                Some(Ok((current_idx, node)))
            }
            Err(e) => {
                self.stack.clear();
                Some(Err(e))
            }
        }
    }
}
