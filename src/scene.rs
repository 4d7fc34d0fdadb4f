//! Scene: the ordered node list the application owns and the renderer reads.

use crate::node::Node;

/// Index of a node in its scene (its paint order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// An ordered collection of nodes.
///
/// Order is paint order: later nodes are painted over earlier ones.
/// The renderer only ever borrows a scene immutably; all mutation goes
/// through the application (usually from a key handler, between frames).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    /// An empty scene.
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node on top of everything else.
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Append several nodes in order.
    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.extend(nodes);
    }

    /// Swap in a whole new node list, returning the old one.
    pub fn replace(&mut self, nodes: impl IntoIterator<Item = Node>) -> Vec<Node> {
        std::mem::replace(&mut self.nodes, nodes.into_iter().collect())
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Get a node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a node for in-place mutation.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Show or hide a node. Returns `false` if the id is out of range.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> bool {
        self.get_mut(id).map(|node| node.visible = visible).is_some()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in paint order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate in paint order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Iterate mutably in paint order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.nodes.iter_mut()
    }
}

impl From<Vec<Node>> for Scene {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl FromIterator<Node> for Scene {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
