use clap::{Parser, Subcommand, ValueEnum};
use schemars::schema_for;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Args {
    #[command(subcommand)]
    subcommand: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate JSON schema for the specified config file.
    Schema {
        /// Kind of config file.
        #[arg(value_enum, ignore_case = true)]
        kind: ConfigKind,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConfigKind {
    JointMoverConfig,
}

fn main() -> anyhow::Result<()> {
    joint_mover_apps::utils::init_tracing();
    let args = Args::parse();
    debug!(?args);

    match args.subcommand {
        Command::Schema { kind } => {
            let schema = match kind {
                ConfigKind::JointMoverConfig => {
                    schema_for!(joint_mover_apps::JointMoverConfig)
                }
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let bin = env!("CARGO_BIN_NAME");
        assert!(Args::try_parse_from([bin, "schema", "joint-mover-config"]).is_ok());
        assert!(Args::try_parse_from([bin, "schema"]).is_err());
    }
}
