use super::{Command, CommandError, CommandOutput};

/// Signals session termination to the driver instead of calling
/// `process::exit`, so history gets saved and scripts can observe the halt.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Exit("Goodbye!".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_signals_termination() {
        let cmd = ExitCommand::new();
        let output = cmd.execute(&[]).expect("exit never fails");
        assert_eq!(output, CommandOutput::Exit("Goodbye!".to_string()));
    }

    #[test]
    fn test_exit_ignores_extra_args() {
        let cmd = ExitCommand::new();
        assert!(cmd.execute(&["now".to_string()]).is_ok());
    }
}
