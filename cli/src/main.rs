mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, parse, quote};
use rentr_common::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = Config::from_env();

    terminal::logging::init(&cfg.log_level);

    match commands.command {
        Commands::Quote {
            pickup,
            drop_off,
            rate,
            json,
        } => quote::quote(&cfg, &pickup, &drop_off, rate, json),
        Commands::Parse { expression } => parse::parse(&expression),
        Commands::Demo { json } => demo::demo(json).await,
    }
}
