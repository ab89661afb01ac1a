//! Shell completion script generation

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

/// Binary name completions are registered for
const BIN_NAME: &str = "govdash";

/// Write the completion script for `shell` to stdout
pub fn run(shell: Shell) {
    write(shell, &mut io::stdout());
}

fn write(shell: Shell, out: &mut dyn io::Write) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}
