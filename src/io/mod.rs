//! Output path helpers

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EvalError, Result};

/// `save_file` with `.<extension>` appended
///
/// Appends rather than replaces, so `run.v2` becomes `run.v2.png`.
pub fn output_path(save_file: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(save_file.as_os_str());
    path.push(".");
    path.push(extension.trim_start_matches('.'));
    PathBuf::from(path)
}

/// Create every missing parent directory of `path`
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => fs::create_dir_all(parent)
            .map_err(|e| EvalError::io(format!("creating directory {}", parent.display()), e)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path_appends_extension() {
        assert_eq!(output_path(Path::new("figs/curves"), "png"), PathBuf::from("figs/curves.png"));
        assert_eq!(output_path(Path::new("run.v2"), "svg"), PathBuf::from("run.v2.svg"));
        assert_eq!(output_path(Path::new("a"), ".jpeg"), PathBuf::from("a.jpeg"));
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a").join("b").join("plot.png");

        ensure_parent_dir(&target).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        ensure_parent_dir(Path::new("plot.png")).unwrap();
    }
}
