//! Completions command implementation

use super::{Cli, CompletionsArgs};
use clap::CommandFactory;
use clap_complete::generate;

/// Generate shell completions on stdout.
pub fn handle_completions(args: &CompletionsArgs) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(args.shell, &mut command, name, &mut std::io::stdout());
}
