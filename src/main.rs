use bundle_banner::cmd;
use bundle_banner::config::BannerOptions;
use bundle_banner::fmt::NO_EMOJI_VAR;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

/// Prepend a templated license/metadata banner to JavaScript bundles
///
/// bundle-banner renders a banner template against package.json metadata and puts it
/// at the very top of a bundle, ahead of the UMD wrapper and bundler prelude.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepend the banner to a bundle
    Apply {
        /// Bundle to process, or - for stdin
        #[arg(value_name = "BUNDLE")]
        bundle: PathBuf,

        /// Write here instead of in place (- for stdout)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Directory defaults and relative paths resolve against [default: .]
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,

        #[command(flatten)]
        options: BannerOptions,
    },

    /// Print the rendered banner
    Render {
        /// Directory defaults and relative paths resolve against [default: .]
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,

        #[command(flatten)]
        options: BannerOptions,
    },

    /// Verify a bundle starts with a banner
    Check {
        /// Bundle to inspect, or - for stdin
        #[arg(value_name = "BUNDLE")]
        bundle: PathBuf,
    },

    /// Write a starter banner.txt
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Also write .bundle-banner.toml
        #[arg(long)]
        with_config: bool,

        /// Directory to initialize [default: .]
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var(NO_EMOJI_VAR, "1");
    }

    let result = match &cli.command {
        Some(Commands::Apply {
            bundle,
            output,
            project_root,
            options,
        }) => cmd::cmd_apply(bundle, output.as_deref(), options, project_root.as_deref()),
        Some(Commands::Render {
            project_root,
            options,
        }) => cmd::cmd_render(options, project_root.as_deref()),
        Some(Commands::Check { bundle }) => cmd::cmd_check(bundle),
        Some(Commands::Init {
            force,
            with_config,
            project_root,
        }) => cmd::cmd_init(project_root.as_deref(), *force, *with_config),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("bundle-banner v{}", env!("CARGO_PKG_VERSION"));
            println!("Prepend a templated banner to JavaScript bundles\n");
            println!("Usage: bundle-banner <COMMAND>\n");
            println!("Commands:");
            println!("  apply        Prepend the banner to a bundle");
            println!("  render       Print the rendered banner");
            println!("  check        Verify a bundle starts with a banner");
            println!("  init         Write a starter banner.txt");
            println!("  completions  Generate shell completions");
            println!("\nRun 'bundle-banner <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use bundle_banner::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn test_apply_parses_banner_options() {
        let cli = Cli::try_parse_from([
            "bundle-banner",
            "apply",
            "dist/bundle.js",
            "--pkg",
            "alt-package.json",
            "--comment-style",
            "line",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Apply { bundle, options, .. }) => {
                assert_eq!(bundle, PathBuf::from("dist/bundle.js"));
                assert_eq!(options.pkg, Some(PathBuf::from("alt-package.json")));
                assert!(options.comment_style.is_some());
            }
            _ => panic!("expected apply"),
        }
    }
}
