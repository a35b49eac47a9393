//! Path normalization for comparing source-file identities.

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute and fold `.`/`..` components lexically.
///
/// Relative paths are resolved against the current directory. Symlinks are
/// not followed; two spellings of the same file compare equal only if they
/// normalize to the same text. Returns `None` if the current directory is
/// unavailable.
#[must_use]
pub fn absolute(path: &Path) -> Option<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };
    Some(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays `/`
                if !matches!(out.components().next_back(), Some(Component::RootDir) | None) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
