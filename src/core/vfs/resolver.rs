use super::node::NodeId;
use super::{Vfs, VfsError};

impl Vfs {
    /// Resolves a path string against `base` and returns the target node.
    ///
    /// An empty path resolves to `base`. A leading `/` rebases resolution at
    /// the root. Segments are consumed left to right: empty segments (from
    /// doubled or trailing slashes) and `.` are no-ops, `..` ascends one
    /// level (a no-op at the root), and anything else is an exact child
    /// lookup. Looking up a child of a file fails with `NotFound` because a
    /// file has no children mapping. The first failing segment aborts the
    /// whole resolution. Pure: never mutates the tree.
    pub fn resolve(&self, base: NodeId, path: &str) -> Result<NodeId, VfsError> {
        let mut at = if path.starts_with('/') {
            self.root_id()
        } else {
            base
        };

        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if let Some(parent) = self.node(at).and_then(|node| node.parent) {
                        at = parent;
                    }
                }
                name => {
                    let child = self
                        .node(at)
                        .and_then(|node| node.children())
                        .and_then(|children| children.get(name))
                        .copied();
                    at = child.ok_or_else(|| VfsError::NotFound(path.to_string()))?;
                }
            }
        }

        Ok(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vfs() -> Vfs {
        Vfs::new()
    }

    #[test]
    fn test_empty_path_resolves_to_base() {
        let vfs = vfs();
        let base = vfs.current_id();
        assert_eq!(vfs.resolve(base, ""), Ok(base));
    }

    #[test]
    fn test_absolute_path_ignores_base() {
        let mut vfs = vfs();
        vfs.change_directory(Some("/home/user/documents")).ok();
        let from_docs = vfs.resolve(vfs.current_id(), "/home/user");
        let from_root = vfs.resolve(vfs.root_id(), "/home/user");
        assert_eq!(from_docs, from_root);
    }

    #[test]
    fn test_relative_path_uses_base() {
        let vfs = vfs();
        let home = vfs.resolve(vfs.root_id(), "home").expect("home exists");
        let user = vfs.resolve(home, "user").expect("user exists");
        assert_eq!(vfs.resolve(vfs.root_id(), "home/user"), Ok(user));
    }

    #[test]
    fn test_doubled_and_trailing_slashes_are_skipped() {
        let vfs = vfs();
        let plain = vfs.resolve(vfs.root_id(), "/home/user");
        let noisy = vfs.resolve(vfs.root_id(), "//home//user/");
        assert_eq!(plain, noisy);
    }

    #[test]
    fn test_dot_is_a_no_op() {
        let vfs = vfs();
        let plain = vfs.resolve(vfs.root_id(), "/home/user");
        let dotted = vfs.resolve(vfs.root_id(), "/./home/./user/.");
        assert_eq!(plain, dotted);
    }

    #[test]
    fn test_dot_dot_ascends() {
        let vfs = vfs();
        let home = vfs.resolve(vfs.root_id(), "/home");
        let back_up = vfs.resolve(vfs.root_id(), "/home/user/..");
        assert_eq!(home, back_up);
    }

    #[test]
    fn test_dot_dot_at_root_stays_at_root() {
        let vfs = vfs();
        assert_eq!(vfs.resolve(vfs.root_id(), "/../../.."), Ok(vfs.root_id()));
    }

    #[test]
    fn test_missing_segment_fails() {
        let vfs = vfs();
        let result = vfs.resolve(vfs.root_id(), "/home/nope/user");
        assert!(matches!(result, Err(VfsError::NotFound(_))));
    }

    #[test]
    fn test_descending_through_a_file_fails() {
        let vfs = vfs();
        let result = vfs.resolve(vfs.root_id(), "/home/user/readme.txt/inner");
        assert!(matches!(result, Err(VfsError::NotFound(_))));
    }

    #[test]
    fn test_file_itself_resolves() {
        let vfs = vfs();
        let file = vfs.resolve(vfs.root_id(), "/home/user/readme.txt");
        assert!(file.is_ok());
    }
}
