//! BKS CLI - Command line tool for the Capital Bikeshare daily dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bks-cli",
    version,
    about = "Capital Bikeshare ride data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bks_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bks_cmd::run(cli.command).await
}
