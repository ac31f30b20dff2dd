use std::{fs, path::Path};

use super::{Config, ConfigError};

/// Reads a line-oriented rc file of `key = value` pairs. Blank lines and
/// `#` comments are skipped; values may be wrapped in single or double
/// quotes; unknown keys are ignored.
pub struct ConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub fn load_into(&self, config: &mut Config) -> Result<(), ConfigError> {
        if self.path.exists() {
            let content = fs::read_to_string(self.path)?;
            for line in content.lines() {
                self.process_line(line, config);
            }
        }
        Ok(())
    }

    fn process_line(&self, line: &str, config: &mut Config) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        if let Some((key, value)) = line.split_once('=') {
            let value = strip_quotes(value.trim());
            match key.trim() {
                "vfs-root" => config.set_vfs_root(value),
                "prompt" => config.set_prompt(value),
                "startup-script" => config.set_startup_script(value),
                _ => {}
            }
        }
    }
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn create_rc_file(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, content).expect("temp file is writable");
        path
    }

    #[test]
    fn test_loads_known_keys() {
        let path = create_rc_file(
            "vshrc_known_keys",
            "vfs-root = /srv/vfs\nprompt = >\nstartup-script = /tmp/boot.vsh\n",
        );
        let mut config = Config::default();
        ConfigLoader::new(&path).load_into(&mut config).expect("readable");

        assert_eq!(config.vfs_root(), Some("/srv/vfs"));
        assert_eq!(config.prompt(), ">");
        assert_eq!(config.startup_script(), Some("/tmp/boot.vsh"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_skips_comments_and_unknown_keys() {
        let path = create_rc_file(
            "vshrc_comments",
            "# a comment\n\nnot-a-key = whatever\nprompt = '%'\n",
        );
        let mut config = Config::default();
        ConfigLoader::new(&path).load_into(&mut config).expect("readable");

        assert_eq!(config.prompt(), "%");
        assert!(config.vfs_root().is_none());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_is_fine() {
        let path = env::temp_dir().join("vshrc_that_does_not_exist");
        let mut config = Config::default();
        assert!(ConfigLoader::new(&path).load_into(&mut config).is_ok());
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"hello\""), "hello");
        assert_eq!(strip_quotes("'hello'"), "hello");
        assert_eq!(strip_quotes("hello"), "hello");
        assert_eq!(strip_quotes("\""), "\"");
    }
}
