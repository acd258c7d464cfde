//! # TDA - Todo Adventure
//!
//! A colourful, session-scoped task list for the terminal. Add short tasks,
//! tick them off, and get a little celebration when everything is done.
//!
//! ## Key Features
//!
//! - **Session-Only State**: the list lives in memory for one run - nothing
//!   touches disk, nothing survives exit
//! - **Two Views**: a welcome screen and the task list, navigated by a key press
//! - **Smart Ordering**: open tasks float above completed ones, newest first
//!   within each group
//! - **Live Counters**: total / done / remaining, recomputed on every change
//! - **Completion Celebration**: finish every task and the app tells you so
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch with the welcome screen
//! tda
//!
//! # Jump straight to the task list
//! tda --skip-welcome
//! ```
//!
//! ## Keys
//!
//! - Type + `Enter` - add a task (blank input is ignored)
//! - `Esc`/`Tab` - switch between the input field and the list
//! - `j`/`k` or arrows - move the selection
//! - `Enter`/`Space` - toggle the selected task
//! - `d`/`x` - delete the selected task
//! - `q` / `Ctrl+C` - quit
//!
//! There is deliberately no persistence, no editing of existing tasks, and no
//! undo. When the terminal closes, the adventure is over.

use clap::Parser;

pub mod cli;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use tui::run::run_tui;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_tui(cli.skip_welcome) {
        eprintln!("Terminal error: {e}");
        std::process::exit(1);
    }
}
