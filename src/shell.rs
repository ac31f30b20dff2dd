use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rustyline::{config::Configurer, history::FileHistory, Editor};

use crate::core::commands::{CommandExecutor, CommandOutput};
use crate::core::config::Config;
use crate::core::vfs::Vfs;
use crate::error::ShellError;
use crate::flags::Flags;
use crate::highlight::SyntaxHighlighter;
use crate::input::ShellCompleter;

pub struct Shell {
    editor: Editor<ShellCompleter, FileHistory>,
    vfs: Arc<Mutex<Vfs>>,
    config: Config,
    executor: CommandExecutor,
    highlighter: SyntaxHighlighter,
    flags: Flags,
    history_path: Option<PathBuf>,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut config = Config::new();
        if let Some(path) = flags.get_value("config") {
            config = config.with_rc_path(PathBuf::from(path));
        }
        // Load first, then apply flags, so flag values win over rc values.
        config.load()?;
        config.apply_flags(&flags);

        let vfs = Arc::new(Mutex::new(Vfs::new()));
        let executor = CommandExecutor::new(vfs.clone(), config.clone());

        let completer = ShellCompleter::new(vfs.clone(), executor.command_names());
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);

        let history_path = dirs::home_dir().map(|home| home.join(".vsh_history"));
        if let Some(path) = &history_path {
            if path.exists() {
                if let Err(e) = editor.load_history(path) {
                    if !flags.is_set("quiet") {
                        eprintln!("Warning: couldn't load history: {}", e);
                    }
                }
            }
        }

        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to leave the shell");
        })?;

        Ok(Shell {
            editor,
            vfs,
            config,
            executor,
            highlighter: SyntaxHighlighter::new(),
            flags,
            history_path,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        match self.config.startup_script().map(str::to_string) {
            Some(script) => self.run_script(&script),
            None => self.run_interactive(),
        }
    }

    /// Runs a command script and returns. The first failing line halts the
    /// whole run with a nonzero exit status; `exit` halts it cleanly.
    pub fn run_script(&mut self, path: &str) -> Result<(), ShellError> {
        match self.executor.execute("source", &[path.to_string()]) {
            Ok(output) => {
                self.render(&output);
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", self.highlighter.highlight_error(&format!("Error: {}", e)));
                std::process::exit(1);
            }
        }
    }

    fn run_interactive(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if !self.dispatch(&line) {
                        break;
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("{}", self.highlighter.highlight_hint("CTRL-C"));
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    if !self.flags.is_set("quiet") {
                        println!("{}", self.highlighter.highlight_hint("CTRL-D"));
                    }
                    break;
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    continue;
                }
            }
        }
        self.save_history();
        Ok(())
    }

    /// Dispatches one interactive line and renders the outcome. Returns
    /// whether the loop should keep running; command errors never stop an
    /// interactive session.
    fn dispatch(&mut self, line: &str) -> bool {
        match self.executor.dispatch_line(line) {
            Ok(CommandOutput::Silent) => true,
            Ok(CommandOutput::Text(text)) => {
                println!("{}", text);
                true
            }
            Ok(CommandOutput::Exit(message)) => {
                println!("{}", self.highlighter.highlight_success(&message));
                false
            }
            Err(e) => {
                eprintln!("{}", self.highlighter.highlight_error(&format!("Error: {}", e)));
                true
            }
        }
    }

    fn render(&self, output: &CommandOutput) {
        match output {
            CommandOutput::Silent => {}
            CommandOutput::Text(text) => println!("{}", text),
            CommandOutput::Exit(message) => {
                println!("{}", self.highlighter.highlight_success(message));
            }
        }
    }

    fn prompt(&self) -> String {
        let pwd = self
            .vfs
            .lock()
            .map(|vfs| vfs.working_directory())
            .unwrap_or_else(|_| "?".to_string());
        format!("{} {} ", pwd, self.config.prompt())
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                if !self.flags.is_set("quiet") {
                    eprintln!("Warning: couldn't save history: {}", e);
                }
            }
        }
    }
}
