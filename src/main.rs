mod cli;

use std::process::ExitCode;

use cli::Cli;

fn main() -> ExitCode {
    Cli::init(module_path!())
}
