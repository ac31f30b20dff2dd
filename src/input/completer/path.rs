use std::sync::{Arc, Mutex};

use rustyline::completion::Pair;

use crate::core::vfs::Vfs;

/// Completes argument positions as namespace paths by listing the directory
/// portion of the incomplete word in the live namespace. Directory
/// candidates keep their `/` suffix so completions chain.
#[derive(Clone)]
pub struct VfsPathCompleter {
    vfs: Arc<Mutex<Vfs>>,
}

impl VfsPathCompleter {
    pub fn new(vfs: Arc<Mutex<Vfs>>) -> Self {
        Self { vfs }
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix) = split_input(incomplete);

        let names = {
            let vfs = match self.vfs.lock() {
                Ok(vfs) => vfs,
                Err(_) => return Vec::new(),
            };
            let listing = if dir.is_empty() {
                vfs.list(None)
            } else {
                vfs.list(Some(dir))
            };
            match listing {
                Ok(names) => names,
                Err(_) => return Vec::new(),
            }
        };

        names
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.clone(),
                replacement: format!("{}{}", dir, name),
            })
            .collect()
    }
}

/// Splits an incomplete word at its last `/`: the directory portion keeps
/// the slash, the rest is the prefix to match against child names.
fn split_input(incomplete: &str) -> (&str, &str) {
    match incomplete.rfind('/') {
        Some(pos) => incomplete.split_at(pos + 1),
        None => ("", incomplete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completer() -> VfsPathCompleter {
        VfsPathCompleter::new(Arc::new(Mutex::new(Vfs::new())))
    }

    fn replacements(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|p| p.replacement).collect()
    }

    #[test]
    fn test_absolute_prefix() {
        let matches = replacements(completer().complete_path("/ho"));
        assert_eq!(matches, ["/home/"]);
    }

    #[test]
    fn test_nested_directory() {
        let matches = replacements(completer().complete_path("/home/user/do"));
        assert_eq!(matches, ["/home/user/documents/", "/home/user/downloads/"]);
    }

    #[test]
    fn test_relative_to_working_location() {
        let vfs = Arc::new(Mutex::new(Vfs::new()));
        vfs.lock()
            .expect("lock")
            .change_directory(Some("/home/user"))
            .expect("seeded path");
        let matches = replacements(VfsPathCompleter::new(vfs).complete_path("rea"));
        assert_eq!(matches, ["readme.txt"]);
    }

    #[test]
    fn test_directory_listing_after_slash() {
        let matches = replacements(completer().complete_path("/home/"));
        assert_eq!(matches, ["/home/user/"]);
    }

    #[test]
    fn test_unresolvable_directory_gives_nothing() {
        assert!(completer().complete_path("/nope/x").is_empty());
    }

    #[test]
    fn test_split_input() {
        assert_eq!(split_input("/home/us"), ("/home/", "us"));
        assert_eq!(split_input("readme"), ("", "readme"));
        assert_eq!(split_input("/"), ("/", ""));
    }
}
