//! firebase-setup CLI - post-install configuration for the NativeScript
//! Firebase plugin

use anyhow::Result;
use clap::{Parser, Subcommand};
use setup_core::tui::SetupArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "firebase-setup")]
#[command(about = "Configure the NativeScript Firebase plugin after install")]
#[command(version)]
pub struct Args {
    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-run the interactive prompts even when a saved configuration exists
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let setup_args = SetupArgs {
        root: args.root,
        reconfigure: matches!(args.command, Some(Command::Config)),
    };

    let result = setup_core::tui::run(setup_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
