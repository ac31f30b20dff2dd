use super::{Command, CommandError, CommandOutput};

const HELP_TEXT: &str = "\
Commands:
  ls [path]             list directory contents
  cd [path]             change the working directory
  pwd                   print the working directory
  echo [args...]        print arguments
  rmdir <path>          remove an empty directory
  chown <owner> <path>  change a node's owner
  owner <path>          print a node's owner
  source <file>         run commands from a script file
  conf-dump             print the effective configuration
  help                  show this message
  exit                  leave the shell";

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String]) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Text(HELP_TEXT.to_string()))
    }
}
