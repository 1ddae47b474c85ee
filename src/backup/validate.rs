//! Validation functions for configuration values.
//!
//! Provides custom validation functions for directories, path
//! components, and exclusion patterns.

use globset::GlobBuilder;
use sanitize_filename::{is_sanitized, sanitize};
use validator::ValidationError;

use std::path::Path;

pub fn validate_dir_exist<P: AsRef<Path>>(dir: P) -> Result<(), ValidationError> {
    let dir = dir.as_ref();
    if dir.exists() {
        if !dir.is_dir() {
            return Err(ValidationError::new("InvalidDirectory")
                .with_message(format!("{:?} is not a directory", dir).into()));
        }
    } else {
        return Err(ValidationError::new("InvalidDirectory")
            .with_message(format!("{:?} not found", dir).into()));
    }

    Ok(())
}

pub fn validate_path_component<S: AsRef<str>>(name: S) -> Result<(), ValidationError> {
    let name = name.as_ref();
    if name.is_empty() {
        return Err(
            ValidationError::new("InvalidName").with_message("name must not be empty".into())
        );
    }

    if !is_sanitized(name) {
        return Err(ValidationError::new("InvalidName").with_message(
            format!("invalid path component, try sanitizing like {:?}", sanitize(name)).into(),
        ));
    }

    Ok(())
}

pub fn validate_exclude_globs<S: AsRef<str>>(globs: &[S]) -> Result<(), ValidationError> {
    for glob in globs {
        if let Err(e) = GlobBuilder::new(glob.as_ref())
            .literal_separator(true)
            .build()
        {
            return Err(ValidationError::new("InvalidGlob")
                .with_message(format!("bad exclude pattern {:?}: {}", glob.as_ref(), e).into()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_dir_exist() {
        let dir = TempDir::new().unwrap();
        assert!(validate_dir_exist(dir.path()).is_ok());
        assert!(validate_dir_exist(dir.path().join("missing")).is_err());

        let file = dir.path().join("file");
        std::fs::write(&file, "x").unwrap();
        assert!(validate_dir_exist(&file).is_err());
    }

    #[test]
    fn test_validate_path_component() {
        assert!(validate_path_component("fromPast").is_ok());
        assert!(validate_path_component("R3DSH1FT").is_ok());
        assert!(validate_path_component("").is_err());
        assert!(validate_path_component("a/b").is_err());
    }

    #[test]
    fn test_validate_exclude_globs() {
        assert!(validate_exclude_globs(&["lock"]).is_ok());
        assert!(validate_exclude_globs(&["[invalid"]).is_err());
    }
}
