use crate::commands::cue::{BatchCommand, GenerateCommand};
use clap::{Parser, Subcommand};

pub mod cue;

/// CLI for generating CUE sheets from timestamped track listings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Generate(GenerateCommand),
    Batch(BatchCommand),
}
