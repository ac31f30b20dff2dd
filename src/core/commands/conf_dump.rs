use super::{Command, CommandError, CommandOutput};
use crate::core::config::Config;

/// Renders the effective configuration, including the inert `vfs-root`
/// setting.
#[derive(Clone)]
pub struct ConfDumpCommand {
    config: Config,
}

impl ConfDumpCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Command for ConfDumpCommand {
    fn execute(&self, _args: &[String]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Text(self.config.dump()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conf_dump_renders_settings() {
        let cmd = ConfDumpCommand::new(Config::default());
        let CommandOutput::Text(text) = cmd.execute(&[]).expect("conf-dump never fails") else {
            panic!("conf-dump should produce text");
        };
        assert!(text.contains("vfs-root"));
        assert!(text.contains("prompt"));
        assert!(text.contains("startup-script"));
    }
}
