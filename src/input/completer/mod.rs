use std::borrow::Cow;
use std::sync::{Arc, Mutex};

mod command;
mod path;

use crate::core::vfs::Vfs;
use crate::highlight::SyntaxHighlighter;
use command::CommandCompleter;
use path::VfsPathCompleter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// rustyline helper: the first word completes against the verb registry,
/// later words complete as namespace paths.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: VfsPathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(vfs: Arc<Mutex<Vfs>>, commands: Vec<String>) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(commands),
            path_completer: VfsPathCompleter::new(vfs),
            highlighter: SyntaxHighlighter::new(),
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

        if line_up_to_cursor.ends_with(' ') {
            words.push("");
        }

        let (start, matches) = match words.len() {
            0 => (0, self.command_completer.complete_command("")),
            1 => {
                let word = words[0];
                let start = line_up_to_cursor.rfind(word).unwrap_or(0);
                (start, self.command_completer.complete_command(word))
            }
            _ => {
                let last_word = words.last().unwrap_or(&"");
                let start = if last_word.is_empty() {
                    pos
                } else {
                    line_up_to_cursor.rfind(last_word).unwrap_or(pos)
                };
                (start, self.path_completer.complete_path(last_word))
            }
        };

        Ok((start, matches))
    }
}
