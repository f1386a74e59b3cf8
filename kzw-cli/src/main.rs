//! kzw CLI - browse Kazakhstan daily weather data and play the
//! weather games.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "kzw-cli",
    version,
    about = "Kazakhstan agro-weather data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: kzw_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    kzw_cmd::run(cli.command)
}
