use std::sync::{Arc, Mutex};

use super::{Command, CommandError, CommandOutput};
use crate::core::vfs::Vfs;

/// `chown <owner> <path>`: owner first, then path.
#[derive(Clone)]
pub struct ChownCommand {
    vfs: Arc<Mutex<Vfs>>,
}

impl ChownCommand {
    pub fn new(vfs: Arc<Mutex<Vfs>>) -> Self {
        Self { vfs }
    }
}

impl Command for ChownCommand {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        if args.len() != 2 {
            return Err(CommandError::InvalidArguments(
                "chown requires an owner and a path".to_string(),
            ));
        }

        let mut vfs = self.vfs.lock().map_err(|_| {
            CommandError::ExecutionError("failed to access the namespace".to_string())
        })?;
        vfs.change_owner(&args[1], &args[0])?;
        Ok(CommandOutput::Silent)
    }
}
