use std::fmt;

mod node;
mod resolver;

pub use node::{Node, NodeId, DEFAULT_OWNER};

/// Failure kinds surfaced by namespace operations. Carried path strings are
/// the exact text the caller passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    NotFound(String),
    NotADirectory(String),
    NotEmpty(String),
    IsRoot,
    Busy(String),
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsError::NotFound(path) => write!(f, "no such file or directory: {}", path),
            VfsError::NotADirectory(path) => write!(f, "not a directory: {}", path),
            VfsError::NotEmpty(path) => write!(f, "directory not empty: {}", path),
            VfsError::IsRoot => write!(f, "cannot remove the root directory"),
            VfsError::Busy(path) => write!(f, "directory is in use: {}", path),
        }
    }
}

impl std::error::Error for VfsError {}

/// The in-memory namespace: an arena of nodes plus the working location.
///
/// Removed nodes leave a tombstone slot behind, so a `NodeId` is stable for
/// as long as its node lives. No operation ever hands out an id for a
/// detached node.
pub struct Vfs {
    nodes: Vec<Option<Node>>,
    root: NodeId,
    current: NodeId,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vfs {
    /// Builds the namespace with its fixed seed hierarchy. The working
    /// location starts at the root.
    pub fn new() -> Self {
        let mut vfs = Self {
            nodes: Vec::new(),
            root: NodeId::new(0),
            current: NodeId::new(0),
        };
        let root = vfs.alloc(Node::directory("", None));
        vfs.root = root;
        vfs.current = root;
        vfs.seed();
        vfs
    }

    fn seed(&mut self) {
        let home = self.add_directory(self.root, "home");
        let user = self.add_directory(home, "user");
        self.add_file(user, "readme.txt");
        let documents = self.add_directory(user, "documents");
        self.add_file(documents, "file1.doc");
        self.add_file(documents, "file2.doc");
        let downloads = self.add_directory(user, "downloads");
        self.add_file(downloads, "archive.zip");
        let temp = self.add_directory(user, "temp");
        self.add_directory(temp, "to_delete");
        let projects = self.add_directory(user, "projects");
        self.add_directory(projects, "project1");
        self.add_directory(projects, "project2");
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(node));
        id
    }

    // Sibling names must stay unique; the seed tree is the only inserter and
    // never repeats a name under one parent.
    fn attach(&mut self, parent: NodeId, node: Node) -> NodeId {
        let name = node.name.clone();
        let id = self.alloc(node);
        if let Some(children) = self.node_mut(parent).and_then(Node::children_mut) {
            debug_assert!(!children.contains_key(&name));
            children.insert(name, id);
        }
        id
    }

    fn add_directory(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.attach(parent, Node::directory(name, Some(parent)))
    }

    fn add_file(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.attach(parent, Node::file(name, parent))
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())?.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())?.as_mut()
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn current_id(&self) -> NodeId {
        self.current
    }

    /// Lists the child names of the target directory, in lexicographic
    /// order, with directories suffixed `/`. `None` targets the working
    /// location.
    pub fn list(&self, path: Option<&str>) -> Result<Vec<String>, VfsError> {
        let path = path.unwrap_or(".");
        let target = self.resolve(self.current, path)?;
        let node = self
            .node(target)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        let children = node
            .children()
            .ok_or_else(|| VfsError::NotADirectory(path.to_string()))?;

        Ok(children
            .iter()
            .map(|(name, id)| {
                if self.node(*id).is_some_and(Node::is_directory) {
                    format!("{}/", name)
                } else {
                    name.clone()
                }
            })
            .collect())
    }

    /// Moves the working location. The location is untouched when the path
    /// fails to resolve or names a file.
    pub fn change_directory(&mut self, path: Option<&str>) -> Result<(), VfsError> {
        let path = path.unwrap_or(".");
        let target = self.resolve(self.current, path)?;
        let node = self
            .node(target)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        if !node.is_directory() {
            return Err(VfsError::NotADirectory(path.to_string()));
        }
        self.current = target;
        Ok(())
    }

    /// Absolute path of the working location; the root renders as `/`.
    pub fn working_directory(&self) -> String {
        self.path_of(self.current)
    }

    pub(crate) fn path_of(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut at = id;
        while let Some(node) = self.node(at) {
            match node.parent {
                Some(parent) => {
                    parts.push(node.name.clone());
                    at = parent;
                }
                None => break,
            }
        }
        if parts.is_empty() {
            "/".to_string()
        } else {
            parts.reverse();
            format!("/{}", parts.join("/"))
        }
    }

    /// Detaches and destroys an empty directory. The root and the working
    /// location are never removable.
    pub fn remove_directory(&mut self, path: &str) -> Result<(), VfsError> {
        let target = self.resolve(self.current, path)?;
        let node = self
            .node(target)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        let children = node
            .children()
            .ok_or_else(|| VfsError::NotADirectory(path.to_string()))?;
        if target == self.root {
            return Err(VfsError::IsRoot);
        }
        if !children.is_empty() {
            return Err(VfsError::NotEmpty(path.to_string()));
        }
        if target == self.current {
            return Err(VfsError::Busy(path.to_string()));
        }

        let parent = node.parent;
        let name = node.name.clone();
        if let Some(children) = parent
            .and_then(|id| self.node_mut(id))
            .and_then(Node::children_mut)
        {
            children.remove(&name);
        }
        self.nodes[target.index()] = None;
        Ok(())
    }

    /// Replaces the owner label of the target node (file or directory).
    pub fn change_owner(&mut self, path: &str, new_owner: &str) -> Result<(), VfsError> {
        let target = self.resolve(self.current, path)?;
        let node = self
            .node_mut(target)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        node.owner = new_owner.to_string();
        Ok(())
    }

    /// Owner label of the target node.
    pub fn owner(&self, path: &str) -> Result<String, VfsError> {
        let target = self.resolve(self.current, path)?;
        let node = self
            .node(target)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        Ok(node.owner.clone())
    }
}
