use rustyline::completion::Pair;

/// Completes the verb position from the dispatcher's registered commands.
/// The registry is fixed at startup, so the list is captured once.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: Vec<String>,
}

impl CommandCompleter {
    pub fn new(commands: Vec<String>) -> Self {
        Self { commands }
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let input = input.trim();
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completer() -> CommandCompleter {
        CommandCompleter::new(vec![
            "cd".to_string(),
            "chown".to_string(),
            "ls".to_string(),
            "pwd".to_string(),
        ])
    }

    #[test]
    fn test_prefix_match() {
        let matches = completer().complete_command("c");
        let names: Vec<&str> = matches.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(names, ["cd", "chown"]);
    }

    #[test]
    fn test_empty_prefix_matches_all() {
        assert_eq!(completer().complete_command("").len(), 4);
    }

    #[test]
    fn test_no_match() {
        assert!(completer().complete_command("xyz").is_empty());
    }
}
