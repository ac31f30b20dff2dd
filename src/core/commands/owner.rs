use std::sync::{Arc, Mutex};

use super::{Command, CommandError, CommandOutput};
use crate::core::vfs::Vfs;

/// `owner <path>`: prints a node's owner label.
#[derive(Clone)]
pub struct OwnerCommand {
    vfs: Arc<Mutex<Vfs>>,
}

impl OwnerCommand {
    pub fn new(vfs: Arc<Mutex<Vfs>>) -> Self {
        Self { vfs }
    }
}

impl Command for OwnerCommand {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        if args.len() != 1 {
            return Err(CommandError::InvalidArguments(
                "owner requires exactly one path".to_string(),
            ));
        }

        let vfs = self.vfs.lock().map_err(|_| {
            CommandError::ExecutionError("failed to access the namespace".to_string())
        })?;
        Ok(CommandOutput::Text(vfs.owner(&args[0])?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vfs::VfsError;

    #[test]
    fn test_owner_defaults_to_user() {
        let cmd = OwnerCommand::new(Arc::new(Mutex::new(Vfs::new())));
        let output = cmd.execute(&["/home/user/readme.txt".to_string()]).expect("seeded file");
        assert_eq!(output, CommandOutput::Text("user".to_string()));
    }

    #[test]
    fn test_owner_missing_path() {
        let cmd = OwnerCommand::new(Arc::new(Mutex::new(Vfs::new())));
        let result = cmd.execute(&["/nope".to_string()]);
        assert!(matches!(
            result,
            Err(CommandError::Vfs(VfsError::NotFound(_)))
        ));
    }

    #[test]
    fn test_owner_arity() {
        let cmd = OwnerCommand::new(Arc::new(Mutex::new(Vfs::new())));
        assert!(matches!(
            cmd.execute(&[]),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
