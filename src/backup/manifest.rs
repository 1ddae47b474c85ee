//! The reserved folder is listed, not copied.

use crate::backup::function_path;
use crate::backup::result_error::error::Error;
use crate::backup::result_error::result::Result;
use crate::backup::result_error::WithMsg;
use function_name::named;
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `{name}.txt` under `dest`: one line per immediate child of
/// `src_dir`, in enumeration order. The file is staged next to its final
/// place and renamed in, so a half-written manifest never shows up under
/// its real name.
#[named]
pub fn write_manifest(name: &str, src_dir: &Path, dest: &Path) -> Result<PathBuf> {
    let children = fs::read_dir(src_dir)
        .and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
        .map_err(Error::from)
        .with_msg(function_path!())?;

    let mut body = children
        .iter()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .join("\n");
    if !body.is_empty() {
        body.push('\n');
    }

    let final_path = dest.join(format!("{name}.txt"));
    let tmp_path = dest.join(format!("{name}.txt.tmp"));
    fs::write(&tmp_path, body)
        .map_err(Error::from)
        .with_msg(format!("writing manifest {:?} failed", tmp_path))?;
    fs::rename(&tmp_path, &final_path)
        .map_err(Error::from)
        .with_msg(format!("moving manifest into {:?} failed", dest))?;
    debug!("listed {} entries into {:?}", children.len(), final_path);

    Ok(final_path)
}
