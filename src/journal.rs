//! Dated journal entries, one markdown file per day.
//!
//! The backup tool's little sibling: builds today's entry path under
//! `~/notes/shuttle` and hands it to a text editor.

use crate::backup::result_error::error::Error;
use crate::backup::result_error::result::Result;
use crate::backup::result_error::WithMsg;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// `{home}/notes/shuttle/{yy}/{mon}/{d}.md`: two-digit year without a
/// leading zero, lowercased month abbreviation, non-padded day.
pub fn entry_path<O: Display, T: TimeZone<Offset = O>>(home: &Path, dt: &DateTime<T>) -> PathBuf {
    let year = dt.format("%-y").to_string();
    let month = dt.format("%b").to_string().to_lowercase();
    let day = dt.format("%-d").to_string();

    home.join("notes")
        .join("shuttle")
        .join(year)
        .join(month)
        .join(format!("{day}.md"))
}

/// Makes sure the entry's folder exists and hands the file to `editor`,
/// blocking until the editor exits. The exit status is not inspected.
pub fn open_entry(path: &Path, editor: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(Error::from)
            .with_msg(format!("cannot create journal directory {:?}", parent))?;
    }

    debug!("opening {:?} with {}", path, editor);
    let status = Command::new(editor)
        .arg(path)
        .status()
        .map_err(Error::from)
        .with_msg(format!("cannot launch editor {editor:?}"))?;
    debug!("editor exited with {status}");

    Ok(())
}
