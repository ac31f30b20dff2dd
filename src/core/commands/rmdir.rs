use std::sync::{Arc, Mutex};

use super::{Command, CommandError, CommandOutput};
use crate::core::vfs::Vfs;

#[derive(Clone)]
pub struct RmdirCommand {
    vfs: Arc<Mutex<Vfs>>,
}

impl RmdirCommand {
    pub fn new(vfs: Arc<Mutex<Vfs>>) -> Self {
        Self { vfs }
    }
}

impl Command for RmdirCommand {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        if args.len() != 1 {
            return Err(CommandError::InvalidArguments(
                "rmdir requires exactly one path".to_string(),
            ));
        }

        let mut vfs = self.vfs.lock().map_err(|_| {
            CommandError::ExecutionError("failed to access the namespace".to_string())
        })?;
        vfs.remove_directory(&args[0])?;
        Ok(CommandOutput::Silent)
    }
}
