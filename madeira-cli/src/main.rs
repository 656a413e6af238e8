//! Madeira CLI - serves the wood sales dashboard.

use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "madeira",
    version,
    about = "Wood sales dashboard: volume by presentation and sale type by species"
)]
struct Cli {
    /// Turn debugging information on (-d debug, -dd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: madeira_cmd::Command,
}

fn level_for(debug: u8) -> LevelFilter {
    match debug {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(level_for(cli.debug))
        .parse_default_env()
        .init();
    madeira_cmd::run(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::parse_from(["madeira", "serve"]);
        assert_eq!(cli.debug, 0);
        match cli.command {
            madeira_cmd::Command::Serve { data, host, port } => {
                assert_eq!(data, std::path::PathBuf::from(madeira_cmd::DEFAULT_DATA_PATH));
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8050);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn debug_flag_raises_level() {
        let cli = Cli::parse_from(["madeira", "-dd", "check"]);
        assert_eq!(level_for(cli.debug), LevelFilter::Trace);
        assert_eq!(level_for(1), LevelFilter::Debug);
    }
}
