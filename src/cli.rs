use clap::Parser;

/// Session-scoped task list for the terminal.
/// Nothing is written to disk; the list lives for one run.
#[derive(Parser)]
#[command(name = "tda", version, about = "Colourful session task list")]
pub struct Cli {
    /// Skip the welcome screen and open straight onto the task list.
    #[arg(long)]
    pub skip_welcome: bool,
}
