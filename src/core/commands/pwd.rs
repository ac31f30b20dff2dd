use std::sync::{Arc, Mutex};

use super::{Command, CommandError, CommandOutput};
use crate::core::vfs::Vfs;

#[derive(Clone)]
pub struct PwdCommand {
    vfs: Arc<Mutex<Vfs>>,
}

impl PwdCommand {
    pub fn new(vfs: Arc<Mutex<Vfs>>) -> Self {
        Self { vfs }
    }
}

impl Command for PwdCommand {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "pwd takes no arguments".to_string(),
            ));
        }

        let vfs = self.vfs.lock().map_err(|_| {
            CommandError::ExecutionError("failed to access the namespace".to_string())
        })?;
        Ok(CommandOutput::Text(vfs.working_directory()))
    }
}
