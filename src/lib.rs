//! # redshift-backup
//!
//! A personal backup tool: it walks the top level of your home directory
//! and shuttles a fixed set of items onto a removable drive, one
//! minute-stamped folder per run.
//!
//! ## Behavior
//!
//! - **Mandatory items**: always copied
//! - **Optional items**: copied after a per-item yes/no prompt
//! - **`movies`**: listed into `movies.txt` instead of copied
//! - **`lock` entries**: pruned from every directory copy, at any depth
//! - **Same-minute reruns**: overwritten only on explicit consent
//! - **Best-effort copies**: unreadable or vanished paths are reported
//!   as skips, never fatal
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::Local;
//! use redshift_backup::backup::backup_config::BackupConfig;
//! use redshift_backup::backup::{console, driver};
//! use validator::Validate;
//!
//! let config = BackupConfig::from_env()?;
//! config.validate()?;
//!
//! let mut gate = console::std_gate();
//! driver::run(&config, &mut gate, Local::now())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backup;
pub mod journal;
