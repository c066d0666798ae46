pub mod demo;
pub mod parse;
pub mod quote;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "rentr")]
#[command(about = "A car rental valuation and lookup tool.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a rental between two date expressions
    #[command(alias = "q")]
    Quote {
        /// Pickup expression: "today", "tomorrow" or "in N days"
        pickup: String,
        /// Drop-off expression, same forms as pickup
        drop_off: String,
        /// Daily rate; defaults to RENTR_DAILY_RATE
        #[arg(long)]
        rate: Option<Decimal>,
        /// Emit the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a date expression against the current instant
    #[command(alias = "p")]
    Parse { expression: String },
    /// Seed a sample fleet in memory and read a rental back
    #[command(alias = "d")]
    Demo {
        /// Emit the rental as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
