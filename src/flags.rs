use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress warnings and notices".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "config".to_string(),
            Flag {
                short: "-c".to_string(),
                long: "--config".to_string(),
                description: "Specify custom config file path".to_string(),
                takes_value: true,
                value: None,
            },
        );

        flags.insert(
            "script".to_string(),
            Flag {
                short: "-s".to_string(),
                long: "--script".to_string(),
                description: "Run a command script instead of the interactive loop".to_string(),
                takes_value: true,
                value: None,
            },
        );

        flags.insert(
            "vfs-root".to_string(),
            Flag {
                short: "-r".to_string(),
                long: "--vfs-root".to_string(),
                description: "Namespace root path (accepted, currently inert)".to_string(),
                takes_value: true,
                value: None,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            let mut matched = false;

            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    matched = true;
                    if flag.takes_value {
                        if i + 1 < args.len() {
                            flag.value = Some(args[i + 1].clone());
                            i += 1;
                        } else {
                            return Err(ShellError::FlagError(format!(
                                "Flag {} requires a value",
                                arg
                            )));
                        }
                    } else {
                        flag.value = Some("true".to_string());
                    }
                    break;
                }
            }

            if !matched {
                return Err(ShellError::FlagError(format!("Unknown flag: {}", arg)));
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: vsh [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
