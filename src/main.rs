use anyhow::Result;
use clap::Parser;

use u_tollnet::cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    Cli::parse().run()
}
