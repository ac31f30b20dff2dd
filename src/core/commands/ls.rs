use std::sync::{Arc, Mutex};

use super::{Command, CommandError, CommandOutput};
use crate::core::vfs::Vfs;

#[derive(Clone)]
pub struct LsCommand {
    vfs: Arc<Mutex<Vfs>>,
}

impl LsCommand {
    pub fn new(vfs: Arc<Mutex<Vfs>>) -> Self {
        Self { vfs }
    }
}

impl Command for LsCommand {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::InvalidArguments(
                "ls takes 0 or 1 arguments".to_string(),
            ));
        }

        let vfs = self.vfs.lock().map_err(|_| {
            CommandError::ExecutionError("failed to access the namespace".to_string())
        })?;
        let names = vfs.list(args.first().map(String::as_str))?;

        if names.is_empty() {
            Ok(CommandOutput::Silent)
        } else {
            Ok(CommandOutput::Text(names.join("\n")))
        }
    }
}
