use chrono::Local;
use clap::Parser;
use redshift_backup::backup::result_error::error::Error;
use redshift_backup::journal;
use std::path::Path;
use std::process::exit;
use tracing::error;

/// Opens today's journal entry in a text editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Editor to launch; falls back to $EDITOR, then nvim
    #[arg(short, long)]
    editor: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let editor = args
        .editor
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "nvim".to_string());

    let res = std::env::var("HOME").map_err(Error::from).and_then(|home| {
        let today = journal::entry_path(Path::new(&home), &Local::now());
        journal::open_entry(&today, &editor)
    });

    if let Err(e) = res {
        error!("{e}");
        exit(1);
    }
}
