use std::path::{Component, Path, PathBuf};

/// Renders a path with forward slashes regardless of platform.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if cfg!(windows) {
        s.replace('\\', "/")
    } else {
        s.into_owned()
    }
}

/// Lexically normalizes a path: drops `.` components and folds `..` into
/// its parent. Symlinks are not resolved.
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Absolute, cleaned form of `path` relative to the current directory.
///
/// Falls back to the cleaned input if the current directory is unavailable.
#[must_use]
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).map_or_else(|_| clean(path), |abs| clean(&abs))
}

/// Absolute, forward-slash form used as the identity of a matched file.
#[must_use]
pub fn normalize(path: &Path) -> String {
    to_slash(&absolute(path))
}

/// Path shown to users: relative to the current directory when the file
/// lies below it, unchanged otherwise.
#[must_use]
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
        .filter(|rel| !rel.as_os_str().is_empty())
        .map_or_else(|| to_slash(path), |rel| to_slash(&rel))
}
