//! Module identifiers
//!
//! A module identifier is the slash-separated path of a script relative to the
//! app root, with the source extension removed (`widgets/button.js` becomes
//! `widgets/button`). The loader runtime keys its registry by these names and
//! resolves `require` calls with the same rules as [`resolve`].

use std::path::Path;

/// Convert a path to a forward-slash string regardless of platform
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Derive the module identifier for a script stored at `relative` under its root.
///
/// `extension` is given without the leading dot. Paths that do not carry the
/// extension are returned with separators normalized only.
pub fn module_id_for(relative: &Path, extension: &str) -> String {
    let name = to_forward_slashes(relative);
    let suffix = format!(".{extension}");
    match name.strip_suffix(&suffix) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// The directory part of a module identifier (`a/b/c` gives `a/b`, `main` gives ``)
#[allow(dead_code)] // mirrors the runtime loader, used in tests
pub fn dirname(id: &str) -> &str {
    id.rfind('/').map_or("", |idx| &id[..idx])
}

/// Whether `name` refers to a module relative to the requester.
///
/// Matches `.` and `..` on their own or followed by `/`.
#[allow(dead_code)] // mirrors the runtime loader, used in tests
pub fn is_relative(name: &str) -> bool {
    matches!(name, "." | "..") || name.starts_with("./") || name.starts_with("../")
}

/// Resolve `name` as requested from the module `requester` to an absolute identifier.
///
/// Relative names are joined to the requester's directory and folded segment by
/// segment: `..` pops, `.` and empty segments are dropped. A `..` with nothing to
/// pop is ignored. Any other name is already absolute and returned unchanged.
#[allow(dead_code)] // mirrors the runtime loader, used in tests
pub fn resolve(requester: &str, name: &str) -> String {
    if !is_relative(name) {
        return name.to_string();
    }

    let joined = format!("{}/{}", dirname(requester), name);
    let mut segments: Vec<&str> = Vec::new();
    for part in joined.split('/') {
        match part {
            ".." => {
                segments.pop();
            }
            "." | "" => {}
            _ => segments.push(part),
        }
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_module_id_strips_extension() {
        assert_eq!(module_id_for(Path::new("main.js"), "js"), "main");
        assert_eq!(
            module_id_for(Path::new("widgets/button.js"), "js"),
            "widgets/button"
        );
    }

    #[test]
    fn test_module_id_only_strips_trailing_extension() {
        assert_eq!(module_id_for(Path::new("lib.js.map"), "js"), "lib.js.map");
        assert_eq!(module_id_for(Path::new("jquery.min.js"), "js"), "jquery.min");
    }

    #[test]
    fn test_module_id_normalizes_backslashes() {
        let path = PathBuf::from("views\\list.js");
        assert_eq!(module_id_for(&path, "js"), "views/list");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("a/b/c"), "a/b");
        assert_eq!(dirname("main"), "");
        assert_eq!(dirname("a/"), "a");
    }

    #[test]
    fn test_is_relative() {
        assert!(is_relative("."));
        assert!(is_relative(".."));
        assert!(is_relative("./util"));
        assert!(is_relative("../lib/util"));
        assert!(!is_relative("util"));
        assert!(!is_relative(".hidden"));
        assert!(!is_relative("..util"));
        assert!(!is_relative("lib/./util"));
    }

    #[test]
    fn test_resolve_sibling() {
        assert_eq!(resolve("main", "./util"), "util");
        assert_eq!(resolve("views/list", "./item"), "views/item");
    }

    #[test]
    fn test_resolve_parent() {
        assert_eq!(resolve("views/list", "../models/user"), "models/user");
        assert_eq!(resolve("a/b/c", "../../d"), "d");
    }

    #[test]
    fn test_resolve_dot_is_requester_directory() {
        assert_eq!(resolve("views/list", "."), "views");
        assert_eq!(resolve("views/list", ".."), "");
    }

    #[test]
    fn test_resolve_absolute_is_verbatim() {
        assert_eq!(resolve("views/list", "models/user"), "models/user");
        assert_eq!(resolve("views/list", "main"), "main");
    }

    #[test]
    fn test_resolve_dot_slash_matches_directory_join() {
        for (requester, name) in [
            ("main", "x"),
            ("views/list", "item"),
            ("a/b/c/d", "e/f"),
        ] {
            let dir = dirname(requester);
            let direct = if dir.is_empty() {
                name.to_string()
            } else {
                format!("{dir}/{name}")
            };
            assert_eq!(resolve(requester, &format!("./{name}")), direct);
        }
    }

    #[test]
    fn test_resolve_excess_parent_segments_are_ignored() {
        assert_eq!(resolve("main", "../../../util"), "util");
        assert_eq!(resolve("a/b", "../../../../x/y"), "x/y");
        assert_eq!(resolve("main", "../.."), "");
    }

    #[test]
    fn test_resolve_collapses_empty_and_dot_segments() {
        assert_eq!(resolve("a/b", ".//c/./d"), "a/c/d");
    }
}
