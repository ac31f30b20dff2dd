use super::{Command, CommandError, CommandOutput};

/// Pure string passthrough; never touches the namespace.
#[derive(Clone)]
pub struct EchoCommand;

impl Default for EchoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}
