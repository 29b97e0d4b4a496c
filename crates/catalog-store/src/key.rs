//! Store key normalization
//!
//! Keys are relative paths joined with forward slashes regardless of the
//! platform separator, so `web/pages.js` names the same entry everywhere.

use std::path::{Component, Path};

/// Build a store key from a path relative to the store root.
///
/// Returns `None` when a segment is not valid UTF-8 or the path tries to
/// leave the root (`..`, absolute prefixes).
pub fn key_from_relative(path: &Path) -> Option<String> {
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()?),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Strip a directory-style `prefix` from `key`.
///
/// `web` and `web/` both strip `web/pages.js` down to `pages.js`, but never
/// match `website.js` or the bare key `web`.
pub(crate) fn strip_dir_prefix<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return Some(key);
    }

    key.strip_prefix(prefix)?
        .strip_prefix('/')
        .filter(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn joins_nested_segments_with_forward_slashes() {
        let path: PathBuf = ["web", "static", "app.css"].iter().collect();
        assert_eq!(key_from_relative(&path).as_deref(), Some("web/static/app.css"));
    }

    #[test]
    fn skips_current_dir_components() {
        assert_eq!(
            key_from_relative(Path::new("./sql/./insert.sql")).as_deref(),
            Some("sql/insert.sql")
        );
    }

    #[test]
    fn rejects_paths_leaving_the_root() {
        assert_eq!(key_from_relative(Path::new("../secret.sql")), None);
        assert_eq!(key_from_relative(Path::new("/etc/passwd")), None);
        assert_eq!(key_from_relative(Path::new("")), None);
    }

    #[test]
    fn strip_dir_prefix_respects_segment_boundaries() {
        assert_eq!(strip_dir_prefix("web/pages.js", "web"), Some("pages.js"));
        assert_eq!(strip_dir_prefix("web/pages.js", "web/"), Some("pages.js"));
        assert_eq!(strip_dir_prefix("website.js", "web"), None);
        assert_eq!(strip_dir_prefix("web", "web"), None);
        assert_eq!(strip_dir_prefix("insert.sql", ""), Some("insert.sql"));
    }
}
