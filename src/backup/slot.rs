//! Minute-granularity destination slots.
//!
//! Every run lands in `{destination_root}/{slot label}`; two runs inside
//! the same wall-clock minute share a label and therefore collide.

use crate::backup::console::Confirm;
use crate::backup::function_path;
use crate::backup::notice::Notice;
use crate::backup::result_error::error::Error;
use crate::backup::result_error::result::Result;
use crate::backup::result_error::WithDebugObjectAndFnName;
use chrono::{DateTime, TimeZone};
use function_name::named;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

static SLOT_FORMAT: &str = "%y-%-m-%-d %H%M";

/// Two-digit year, non-padded month and day, zero-padded hour+minute.
/// No seconds; the minute is the whole point.
pub fn slot_label<O: Display, T: TimeZone<Offset = O>>(dt: &DateTime<T>) -> String {
    dt.format(SLOT_FORMAT).to_string()
}

/// Picks the slot directory for this run.
///
/// A slot that already exists means a backup was taken within the same
/// minute. The operator gets to choose: decline and the run is over
/// (`Ok(None)`, nothing touched), or accept and the old tree is removed
/// before the path is handed back. The directory itself is not created
/// here.
pub fn resolve<O, T, C>(dest_root: &Path, now: &DateTime<T>, gate: &mut C) -> Result<Option<PathBuf>>
where
    O: Display,
    T: TimeZone<Offset = O>,
    C: Confirm + ?Sized,
{
    let current = dest_root.join(slot_label(now));

    if current.is_dir() {
        info!("slot {:?} already holds a backup", current);
        println!("{}", Notice::SameMinute);
        if !gate.ask("YOU SURE YOU WANT TO DO IT AGAIN... OVERWRITE?") {
            return Ok(None);
        }
        destroy_existing(&current)?;
    }

    Ok(Some(current))
}

/// Recursively removes a previous backup for the slot being reused.
#[named]
pub fn destroy_existing(slot: &Path) -> Result<()> {
    debug!("removing previous backup at {:?}", slot);
    fs::remove_dir_all(slot)
        .map_err(Error::from)
        .with_debug_object_and_fn_name(slot.to_path_buf(), function_path!())
}
