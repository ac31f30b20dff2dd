use std::collections::BTreeMap;

/// Owner label every node starts with.
pub const DEFAULT_OWNER: &str = "user";

/// Index of a node slot in the namespace arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Only directories carry a children mapping. The map is ordered by name so
/// listings come out deterministic.
#[derive(Clone, Debug)]
pub enum NodeKind {
    Directory { children: BTreeMap<String, NodeId> },
    File,
}

/// One entry in the namespace tree.
///
/// `parent` is a plain arena index, never an owning edge; ownership runs
/// strictly parent -> child through the children mapping. Only the root has
/// no parent.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub owner: String,
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

impl Node {
    pub(crate) fn directory(name: &str, parent: Option<NodeId>) -> Self {
        Self {
            name: name.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            parent,
            kind: NodeKind::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    pub(crate) fn file(name: &str, parent: NodeId) -> Self {
        Self {
            name: name.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            parent: Some(parent),
            kind: NodeKind::File,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub(crate) fn children(&self) -> Option<&BTreeMap<String, NodeId>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, NodeId>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_node() {
        let node = Node::directory("home", Some(NodeId::new(0)));
        assert!(node.is_directory());
        assert_eq!(node.owner, DEFAULT_OWNER);
        assert!(node.children().is_some());
    }

    #[test]
    fn test_file_node_has_no_children() {
        let node = Node::file("readme.txt", NodeId::new(0));
        assert!(!node.is_directory());
        assert!(node.children().is_none());
    }
}
