//! What gets backed up and where it lands.
//!
//! The item lists are fixed at build time; the structure exists so the
//! driver can be pointed at any pair of roots.

use crate::backup::result_error::error::Error;
use crate::backup::result_error::result::Result;
use crate::backup::result_error::WithMsg;
use crate::backup::validate::{validate_dir_exist, validate_exclude_globs, validate_path_component};
use bon::Builder;
use getset::Getters;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use validator::Validate;

/// Items copied on every run.
pub static MANDATORY_ITEMS: [&str; 4] = ["dotfiles", "musics", ".ssh", "docs"];
/// Items the operator is asked about, one by one.
pub static OPTIONAL_ITEMS: [&str; 4] = ["fortress", "matrix", "mems", "games"];
/// Folder that gets listed into a text file instead of copied.
pub static MANIFEST_DIR: &str = "movies";
/// Entry names pruned from every directory copy, at any depth.
pub static EXCLUDED_NAMES: [&str; 1] = ["lock"];

static DEFAULT_MEDIA_ROOT: &str = "/run/media";
static DEFAULT_VOLUME_LABEL: &str = "R3DSH1FT";
static DEFAULT_BACKUP_DIR: &str = "fromPast";

#[derive(Clone, Debug, Validate, Builder, Getters)]
#[getset(get = "pub")]
pub struct BackupConfig {
    /// Directory whose immediate children are classified for backup.
    #[validate(custom(function = validate_dir_exist))]
    #[builder(into)]
    home_root: PathBuf,
    /// Mount root the removable volume shows up under.
    #[builder(default = PathBuf::from(DEFAULT_MEDIA_ROOT), into)]
    media_root: PathBuf,
    #[validate(custom(function = validate_path_component))]
    #[builder(into)]
    operator: String,
    #[validate(custom(function = validate_path_component))]
    #[builder(default = DEFAULT_VOLUME_LABEL.to_string(), into)]
    volume_label: String,
    #[validate(custom(function = validate_path_component))]
    #[builder(default = DEFAULT_BACKUP_DIR.to_string(), into)]
    backup_dir_name: String,
    #[builder(default = name_set(&MANDATORY_ITEMS))]
    mandatory: HashSet<String>,
    #[builder(default = name_set(&OPTIONAL_ITEMS))]
    optional: HashSet<String>,
    #[validate(custom(function = validate_path_component))]
    #[builder(default = MANIFEST_DIR.to_string(), into)]
    manifest_dir_name: String,
    #[validate(custom(function = validate_exclude_globs))]
    #[builder(default = EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect())]
    excludes: Vec<String>,
}

fn name_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl BackupConfig {
    /// Reads operator identity and home directory from the environment,
    /// everything else from the build-time constants.
    pub fn from_env() -> Result<Self> {
        let home = env::var("HOME").map_err(Error::from).with_msg("HOME is not set")?;
        let operator = env::var("LOGNAME")
            .map_err(Error::from)
            .with_msg("LOGNAME is not set")?;

        Ok(Self::builder().home_root(home).operator(operator).build())
    }

    /// `{media_root}/{operator}/{volume_label}/{backup_dir_name}`, where
    /// the minute-stamped slot directories live.
    pub fn destination_root(&self) -> PathBuf {
        self.media_root
            .join(&self.operator)
            .join(&self.volume_label)
            .join(&self.backup_dir_name)
    }

    /// Matcher for entry names left out of every directory copy.
    pub fn exclude_matcher(&self) -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        for name in &self.excludes {
            // patterns were checked by validate()
            builder.add(
                GlobBuilder::new(name)
                    .literal_separator(true)
                    .build()
                    .unwrap(),
            );
        }

        builder.build().unwrap()
    }
}
