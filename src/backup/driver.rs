//! Walks the home directory's top level and decides what happens to
//! each entry.
//!
//! The membership checks are independent: a name sitting in more than
//! one list fires every matching rule. Names matching nothing are
//! silently ignored.

use crate::backup::backup_config::BackupConfig;
use crate::backup::console::Confirm;
use crate::backup::copy::{self, CopyOutcome};
use crate::backup::manifest;
use crate::backup::notice::Notice;
use crate::backup::result_error::error::Error;
use crate::backup::result_error::result::Result;
use crate::backup::result_error::WithMsg;
use crate::backup::slot;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::fs;
use tracing::{debug, info};

/// How a run ended: either every home entry was looked at, or the
/// operator declined to overwrite a same-minute backup.
#[derive(Debug, PartialEq, Eq)]
pub enum RunStatus {
    Done,
    Aborted,
}

/// One full backup run.
///
/// Resolves the minute slot, creates the destination, then classifies
/// every immediate child of the home directory. Copy failures inside an
/// item surface as skip notices and never abort the run; failing to
/// create the destination or list the home directory does.
pub fn run<O, T, C>(config: &BackupConfig, gate: &mut C, now: DateTime<T>) -> Result<RunStatus>
where
    O: Display,
    T: TimeZone<Offset = O>,
    C: Confirm + ?Sized,
{
    let dest_root = config.destination_root();
    let current = match slot::resolve(&dest_root, &now, gate)? {
        Some(path) => path,
        None => return Ok(RunStatus::Aborted),
    };

    fs::create_dir_all(&current)
        .map_err(Error::from)
        .with_msg(format!("cannot create backup destination {:?}", current))?;
    info!("backing up into {:?}", current);

    let excludes = config.exclude_matcher();

    for entry in fs::read_dir(config.home_root())
        .map_err(Error::from)
        .with_msg(format!("cannot list home directory {:?}", config.home_root()))?
    {
        let entry = entry.map_err(Error::from)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("ignoring non-unicode entry {:?}", file_name);
            continue;
        };

        if config.mandatory().contains(name) {
            report(copy::copy_item(&entry.path(), &current.join(name), &excludes));
            println!("{}", Notice::BackedUp(name.to_string()));
        }

        if config.optional().contains(name) {
            // a decline moves straight to the next child
            if !gate.ask(&format!("BACKUP {name}?")) {
                continue;
            }
            report(copy::copy_item(&entry.path(), &current.join(name), &excludes));
            println!("{}", Notice::BackedUp(name.to_string()));
        }

        if name == config.manifest_dir_name() && entry.path().is_dir() {
            let written = manifest::write_manifest(name, &entry.path(), &current)?;
            debug!("manifest written to {:?}", written);
            println!("{}", Notice::BackedUp(format!("{name}.txt")));
        }
    }

    Ok(RunStatus::Done)
}

fn report(outcome: CopyOutcome) {
    debug!(
        copied = outcome.copied,
        skipped = outcome.skips.len(),
        "item finished"
    );
    for skip in outcome.skips {
        println!("{}", Notice::from(skip));
    }
}
