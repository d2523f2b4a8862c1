use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "praktikum",
    about = "Print distance, speed and calories for the sample tracker packages"
)]
pub struct Cli {
    /// Print one JSON object per workout instead of the text summary.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
