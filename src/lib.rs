#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod ops;
pub mod verify;

pub use cli::Tool;
pub use error::*;

/// Parses the command line for `tool` and runs it.
pub fn run(tool: Tool) -> Result<()> {
    use clap::Parser;
    use ops::ChangePolicy;

    match tool {
        Tool::ManifestVersion => {
            let cli = cli::ManifestCli::parse();
            init_logging(cli.args.verbose);
            command::manifest::execute(cli.args, ChangePolicy::RejectUnchanged)
        }
        Tool::UnconditionalManifestVersion => {
            let cli = cli::UnconditionalManifestCli::parse();
            init_logging(cli.args.verbose);
            command::manifest::execute(cli.args, ChangePolicy::Overwrite)
        }
        Tool::JsonConfigVersion => {
            let cli = cli::JsonConfigCli::parse();
            init_logging(cli.args.verbose);
            command::json_config::execute(cli.args)
        }
    }
}

/// `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
