use std::env;
use vsh::flags::Flags;
use vsh::shell::Shell;

fn main() -> Result<(), vsh::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("vsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut shell = Shell::new(flags)?;
    shell.run()
}
