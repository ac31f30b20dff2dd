use std::fmt;
use std::path::PathBuf;

mod loader;

use loader::ConfigLoader;

const DEFAULT_PROMPT: &str = "$";

/// Effective shell configuration: built-in defaults, overlaid by `~/.vshrc`,
/// overlaid by command-line flags.
///
/// `vfs_root` is accepted and reported by `conf-dump` but has no effect on
/// the namespace contents; the seed tree is fixed. Known gap, kept so
/// existing invocations and rc files keep working.
#[derive(Debug, Clone, Default)]
pub struct Config {
    vfs_root: Option<String>,
    prompt: Option<String>,
    startup_script: Option<String>,
    rc_path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Config {
            rc_path: dirs::home_dir().map(|home| home.join(".vshrc")),
            ..Default::default()
        }
    }

    /// Replaces the default `~/.vshrc` location, for the `-c/--config` flag.
    pub fn with_rc_path(mut self, path: PathBuf) -> Self {
        self.rc_path = Some(path);
        self
    }

    /// Reads the rc file if present. A missing file is not an error; a home
    /// directory that cannot be located just means no rc file.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        if let Some(rc_path) = self.rc_path.clone() {
            let loader = ConfigLoader::new(&rc_path);
            loader.load_into(self)?;
        }
        Ok(())
    }

    /// Command-line flags win over rc-file values.
    pub fn apply_flags(&mut self, flags: &crate::flags::Flags) {
        if let Some(value) = flags.get_value("vfs-root") {
            self.vfs_root = Some(value.clone());
        }
        if let Some(value) = flags.get_value("script") {
            self.startup_script = Some(value.clone());
        }
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn vfs_root(&self) -> Option<&str> {
        self.vfs_root.as_deref()
    }

    pub fn startup_script(&self) -> Option<&str> {
        self.startup_script.as_deref()
    }

    pub(crate) fn set_vfs_root(&mut self, value: &str) {
        self.vfs_root = Some(value.to_string());
    }

    pub(crate) fn set_prompt(&mut self, value: &str) {
        self.prompt = Some(value.to_string());
    }

    pub(crate) fn set_startup_script(&mut self, value: &str) {
        self.startup_script = Some(value.to_string());
    }

    /// Rendering used by the `conf-dump` verb.
    pub fn dump(&self) -> String {
        let rc_path = self
            .rc_path
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned());
        [
            format!("vfs-root = {}", self.vfs_root.as_deref().unwrap_or("(none)")),
            format!("prompt = {}", self.prompt()),
            format!(
                "startup-script = {}",
                self.startup_script.as_deref().unwrap_or("(none)")
            ),
            format!("rc-file = {}", rc_path.as_deref().unwrap_or("(none)")),
        ]
        .join("\n")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
