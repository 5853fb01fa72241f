//! Completions command implementation
//!
//! Handles the `bundle-banner completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Binary name completions are generated for
pub const BIN_NAME: &str = "bundle-banner";

/// Generate shell completion scripts
///
/// `cmd` is the CLI definition from the binary (`Cli::command()`), so completions
/// always match the real argument set.
///
/// # Examples
///
/// ```bash
/// # Bash
/// bundle-banner completions bash > /etc/bash_completion.d/bundle-banner
///
/// # Zsh
/// bundle-banner completions zsh > ~/.zfunc/_bundle-banner
///
/// # Fish
/// bundle-banner completions fish > ~/.config/fish/completions/bundle-banner.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    generate(shell, cmd, BIN_NAME, out);
}
