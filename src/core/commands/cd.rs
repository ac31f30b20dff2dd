use std::sync::{Arc, Mutex};

use super::{Command, CommandError, CommandOutput};
use crate::core::vfs::Vfs;

#[derive(Clone)]
pub struct CdCommand {
    vfs: Arc<Mutex<Vfs>>,
}

impl CdCommand {
    pub fn new(vfs: Arc<Mutex<Vfs>>) -> Self {
        Self { vfs }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::InvalidArguments(
                "cd takes 0 or 1 arguments".to_string(),
            ));
        }

        let mut vfs = self.vfs.lock().map_err(|_| {
            CommandError::ExecutionError("failed to access the namespace".to_string())
        })?;
        vfs.change_directory(args.first().map(String::as_str))?;
        Ok(CommandOutput::Silent)
    }
}
