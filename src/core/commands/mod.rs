use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

mod cd;
mod chown;
mod conf_dump;
mod echo;
mod exit;
mod help;
mod ls;
mod owner;
mod pwd;
mod rmdir;
mod source;

pub use cd::CdCommand;
pub use chown::ChownCommand;
pub use conf_dump::ConfDumpCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use owner::OwnerCommand;
pub use pwd::PwdCommand;
pub use rmdir::RmdirCommand;
pub use source::SourceCommand;

use crate::core::config::Config;
use crate::core::vfs::{Vfs, VfsError};
use crate::tokenizer::tokenize;

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
    Vfs(VfsError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "command not found: {}", cmd),
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::Vfs(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<VfsError> for CommandError {
    fn from(err: VfsError) -> Self {
        CommandError::Vfs(err)
    }
}

/// What a dispatched command hands back to the driver. Commands never print;
/// rendering belongs to the shell loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Nothing to render.
    Silent,
    /// Text for the driver to print.
    Text(String),
    /// Terminate the session after printing the farewell.
    Exit(String),
}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Ls(LsCommand),
    Cd(CdCommand),
    Pwd(PwdCommand),
    Echo(EchoCommand),
    Rmdir(RmdirCommand),
    Chown(ChownCommand),
    Owner(OwnerCommand),
    Help(HelpCommand),
    ConfDump(ConfDumpCommand),
    Source(SourceCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        match self {
            CommandType::Ls(cmd) => cmd.execute(args),
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Pwd(cmd) => cmd.execute(args),
            CommandType::Echo(cmd) => cmd.execute(args),
            CommandType::Rmdir(cmd) => cmd.execute(args),
            CommandType::Chown(cmd) => cmd.execute(args),
            CommandType::Owner(cmd) => cmd.execute(args),
            CommandType::Help(cmd) => cmd.execute(args),
            CommandType::ConfDump(cmd) => cmd.execute(args),
            CommandType::Source(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
        }
    }
}

/// Maps verbs to namespace operations. The registry is a fixed table; the
/// namespace behind it is shared through one coarse `Arc<Mutex<..>>`
/// boundary, which is the only serialization this single-mutator design
/// needs.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
}

impl CommandExecutor {
    pub fn new(vfs: Arc<Mutex<Vfs>>, config: Config) -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
        };

        executor
            .commands
            .insert("ls".to_string(), CommandType::Ls(LsCommand::new(vfs.clone())));
        executor
            .commands
            .insert("cd".to_string(), CommandType::Cd(CdCommand::new(vfs.clone())));
        executor
            .commands
            .insert("pwd".to_string(), CommandType::Pwd(PwdCommand::new(vfs.clone())));
        executor
            .commands
            .insert("echo".to_string(), CommandType::Echo(EchoCommand::new()));
        executor.commands.insert(
            "rmdir".to_string(),
            CommandType::Rmdir(RmdirCommand::new(vfs.clone())),
        );
        executor.commands.insert(
            "chown".to_string(),
            CommandType::Chown(ChownCommand::new(vfs.clone())),
        );
        executor
            .commands
            .insert("owner".to_string(), CommandType::Owner(OwnerCommand::new(vfs)));
        executor
            .commands
            .insert("help".to_string(), CommandType::Help(HelpCommand::new()));
        executor.commands.insert(
            "conf-dump".to_string(),
            CommandType::ConfDump(ConfDumpCommand::new(config)),
        );
        executor
            .commands
            .insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        executor.commands.insert(
            "source".to_string(),
            CommandType::Source(SourceCommand::new(executor.clone())),
        );

        executor
    }

    pub fn execute(&self, command: &str, args: &[String]) -> Result<CommandOutput, CommandError> {
        match self.commands.get(command) {
            Some(cmd) => cmd.execute(args),
            None => Err(CommandError::NotFound(command.to_string())),
        }
    }

    /// Tokenizes and dispatches one raw line. Blank lines and `#` comments
    /// are silent no-ops.
    pub fn dispatch_line(&self, line: &str) -> Result<CommandOutput, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(CommandOutput::Silent);
        }

        let tokens = tokenize(line);
        match tokens.split_first() {
            Some((command, args)) => self.execute(command, args),
            None => Ok(CommandOutput::Silent),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Registered verbs, sorted; feeds completion and the help text.
    pub fn command_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}
