//! Input path resolution

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to `home`.
///
/// Only `~` alone or `~/...` is expanded; `~user` forms are left as-is.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                home.to_path_buf()
            } else {
                home.join(rest)
            }
        }
        _ => path.to_path_buf(),
    }
}

/// Resolve a command-line path to an absolute path for display and opening.
pub fn resolve(path: &Path, cwd: &Path, home: Option<&Path>) -> PathBuf {
    let expanded = expand_home(path, home);
    if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    }
}

/// The current user's home directory, if `HOME` is set.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h: &OsString| !h.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_prefix() {
        let home = Path::new("/home/user");
        assert_eq!(
            expand_home(Path::new("~/src/main.rs"), Some(home)),
            PathBuf::from("/home/user/src/main.rs")
        );
        assert_eq!(expand_home(Path::new("~"), Some(home)), PathBuf::from("/home/user"));
    }

    #[test]
    fn test_expand_leaves_other_paths() {
        let home = Path::new("/home/user");
        assert_eq!(
            expand_home(Path::new("~other/x"), Some(home)),
            PathBuf::from("~other/x")
        );
        assert_eq!(expand_home(Path::new("a/~/b"), Some(home)), PathBuf::from("a/~/b"));
        assert_eq!(expand_home(Path::new("/abs"), Some(home)), PathBuf::from("/abs"));
    }

    #[test]
    fn test_expand_without_home() {
        assert_eq!(expand_home(Path::new("~/x"), None), PathBuf::from("~/x"));
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let cwd = Path::new("/work");
        assert_eq!(resolve(Path::new("a.rs"), cwd, None), PathBuf::from("/work/a.rs"));
        assert_eq!(resolve(Path::new("/etc/x"), cwd, None), PathBuf::from("/etc/x"));
        assert_eq!(
            resolve(Path::new("~/x"), cwd, Some(Path::new("/h"))),
            PathBuf::from("/h/x")
        );
    }
}
