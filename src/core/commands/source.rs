use std::fs;

use super::{Command, CommandError, CommandExecutor, CommandOutput};

/// Runs a line-oriented script through the dispatcher: blank lines and `#`
/// comments are skipped, every other line is tokenized and dispatched like
/// interactive input. Execution halts at the first failing command or at an
/// explicit `exit`. Output of successful lines is collected so the driver
/// stays the only printer.
#[derive(Clone)]
pub struct SourceCommand {
    executor: CommandExecutor,
}

impl SourceCommand {
    pub fn new(executor: CommandExecutor) -> Self {
        Self { executor }
    }
}

impl Command for SourceCommand {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        if args.len() != 1 {
            return Err(CommandError::InvalidArguments(
                "source requires a file path".to_string(),
            ));
        }

        let path = &args[0];
        let content = fs::read_to_string(path).map_err(|e| {
            CommandError::IoError(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {}", path, e),
            ))
        })?;

        let mut collected = Vec::new();
        for line in content.lines() {
            match self.executor.dispatch_line(line).map_err(|e| {
                CommandError::ExecutionError(format!("failed to execute '{}': {}", line.trim(), e))
            })? {
                CommandOutput::Silent => {}
                CommandOutput::Text(text) => collected.push(text),
                CommandOutput::Exit(message) => {
                    collected.push(message);
                    return Ok(CommandOutput::Exit(collected.join("\n")));
                }
            }
        }

        if collected.is_empty() {
            Ok(CommandOutput::Silent)
        } else {
            Ok(CommandOutput::Text(collected.join("\n")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::vfs::Vfs;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    fn setup(script_name: &str, content: &str) -> (SourceCommand, Arc<Mutex<Vfs>>, PathBuf) {
        let path = std::env::temp_dir().join(script_name);
        fs::write(&path, content).expect("temp file is writable");
        let vfs = Arc::new(Mutex::new(Vfs::new()));
        let executor = CommandExecutor::new(vfs.clone(), Config::default());
        (SourceCommand::new(executor), vfs, path)
    }

    #[test]
    fn test_source_runs_commands_in_order() {
        let (cmd, vfs, path) = setup(
            "vsh_source_order",
            "# seed navigation\ncd /home/user\n\npwd\necho done\n",
        );
        let output = cmd
            .execute(&[path.to_string_lossy().into_owned()])
            .expect("script is valid");
        assert_eq!(output, CommandOutput::Text("/home/user\ndone".to_string()));
        assert_eq!(vfs.lock().expect("lock").working_directory(), "/home/user");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_source_halts_on_first_error() {
        let (cmd, vfs, path) = setup(
            "vsh_source_halt",
            "cd /nope\ncd /home/user\n",
        );
        let result = cmd.execute(&[path.to_string_lossy().into_owned()]);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
        // The failing line must not be skipped over: the cd after it never ran.
        assert_eq!(vfs.lock().expect("lock").working_directory(), "/");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_source_halts_on_exit() {
        let (cmd, vfs, path) = setup(
            "vsh_source_exit",
            "echo first\nexit\ncd /home/user\n",
        );
        let output = cmd
            .execute(&[path.to_string_lossy().into_owned()])
            .expect("script is valid");
        assert_eq!(output, CommandOutput::Exit("first\nGoodbye!".to_string()));
        assert_eq!(vfs.lock().expect("lock").working_directory(), "/");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_source_missing_file() {
        let vfs = Arc::new(Mutex::new(Vfs::new()));
        let executor = CommandExecutor::new(vfs, Config::default());
        let cmd = SourceCommand::new(executor);
        let result = cmd.execute(&["/nonexistent/script".to_string()]);
        assert!(matches!(result, Err(CommandError::IoError(_))));
    }

    #[test]
    fn test_source_requires_a_path() {
        let vfs = Arc::new(Mutex::new(Vfs::new()));
        let executor = CommandExecutor::new(vfs, Config::default());
        let cmd = SourceCommand::new(executor);
        assert!(matches!(
            cmd.execute(&[]),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
