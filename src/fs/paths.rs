//! Path resolution utilities for surveyctl

use std::path::{Path, PathBuf};

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the surveyctl.json config file in a directory.
pub fn config_path(root: &Path) -> PathBuf {
    root.join("surveyctl.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cwd_with_override() {
        let resolved = resolve_cwd(Some(Path::new("/tmp/somewhere")));
        assert_eq!(resolved, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        let resolved = resolve_cwd(None);
        assert!(!resolved.as_os_str().is_empty());
    }

    #[test]
    fn test_config_path() {
        let path = config_path(Path::new("/work"));
        assert_eq!(path, PathBuf::from("/work/surveyctl.json"));
    }
}
