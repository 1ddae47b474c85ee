//! Operator-facing status lines.
//!
//! These go to stdout verbatim; the logs carry the structured story.

use crate::backup::copy::{Skip, SkipReason};
use derive_more::Display;
use std::path::PathBuf;

#[derive(Debug, Display)]
pub enum Notice {
    #[display("BACKED UP {_0}")]
    BackedUp(String),
    #[display("SKIPPED MISSING FILE: {}", _0.display())]
    SkippedMissingFile(PathBuf),
    #[display("SKIPPED: {}", _0.display())]
    Skipped(PathBuf),
    #[display("NOT A MINUTE HAS PASSED...")]
    SameMinute,
}

impl From<Skip> for Notice {
    fn from(skip: Skip) -> Self {
        match skip.reason {
            SkipReason::MissingSource => Notice::SkippedMissingFile(skip.path),
            SkipReason::Io(_) | SkipReason::Walk(_) => Notice::Skipped(skip.path),
        }
    }
}
