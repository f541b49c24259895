use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use joint_mover::JointMover;
use joint_mover_apps::{utils, JointMoverConfig};
use tracing::debug;

/// Moves the shoulder lift joint of the robot to 0.5 rad over 2 seconds.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Args {
    /// Path to the setting file.
    #[arg(short, long)]
    config_path: Option<PathBuf>,
    /// Prints the default setting as TOML.
    #[arg(long)]
    show_default_config: bool,
    /// Also write JSON logs to daily rotated files in this directory.
    #[arg(long)]
    log_directory: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let _guard = match &args.log_directory {
        Some(dir) => Some(utils::init_tracing_with_file_appender(
            dir.clone(),
            env!("CARGO_BIN_NAME"),
        )),
        None => {
            utils::init_tracing();
            None
        }
    };
    debug!(?args, "parsed args");

    if args.show_default_config {
        print!("{}", toml::to_string(&JointMoverConfig::default())?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = match utils::get_config_path(args.config_path) {
        Some(path) => JointMoverConfig::new(path)?,
        None => JointMoverConfig::default(),
    };
    let client = config.create_client()?;
    let outcome = JointMover::new(client).run().await?;
    debug!(?outcome);

    Ok(if outcome.is_rejected() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let bin = env!("CARGO_BIN_NAME");
        assert!(Args::try_parse_from([bin]).is_ok());
        assert!(Args::try_parse_from([bin, "--show-default-config"]).is_ok());
        assert!(Args::try_parse_from([bin, "--config-path", "path"]).is_ok());
        assert!(Args::try_parse_from([bin, "-c", "path", "--log-directory", "logs"]).is_ok());
        assert!(Args::try_parse_from([bin, "--joint", "elbow"]).is_err());
    }

    #[test]
    fn verify_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
