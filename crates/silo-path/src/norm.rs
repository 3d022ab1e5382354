//! Canonical path manipulation.
//!
//! Shape rules:
//! - empty string and `/` are the root markers (directory-shaped)
//! - a trailing separator means directory-shaped
//! - no trailing separator means file-shaped
//!
//! Stored bucket keys are always file-shaped and `.`/`..`-resolved.

use crate::error::{PathError, Result};

/// The canonical path separator.
pub const SEPARATOR: char = '/';

/// Convert a raw path to forward-slash form.
///
/// Backslashes become separators; nothing else changes (no case folding,
/// no percent-decoding).
pub fn to_unix(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// A path is directory-shaped when it is empty or ends with a separator.
pub fn is_directory(path: &str) -> bool {
    path.is_empty() || path.ends_with(SEPARATOR)
}

/// A path is file-shaped when it is not directory-shaped.
pub fn is_file(path: &str) -> bool {
    !is_directory(path)
}

/// True for the empty string or the bare root marker.
pub fn is_root(path: &str) -> bool {
    path.is_empty() || path == "/"
}

/// Append a trailing separator if one is not already present.
pub fn add_trailing_separator(path: &str) -> String {
    if path.ends_with(SEPARATOR) {
        path.to_string()
    } else {
        format!("{path}{SEPARATOR}")
    }
}

/// Split a path into its non-empty segments.
pub fn split(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}

/// Join non-empty parts with exactly one separator between them.
///
/// Empty parts are skipped and separators are trimmed at part boundaries,
/// so `combine(["folder/", "/file.txt"])` yields `folder/file.txt`.
pub fn combine<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for part in parts {
        let trimmed = part.trim_matches(SEPARATOR);
        if trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(SEPARATOR);
        }
        out.push_str(trimmed);
    }
    out
}

/// Resolve `.` and `..` segments left-to-right.
///
/// `..` at the top of an empty stack cannot escape the root and is
/// dropped. The empty path, and any path that resolves to nothing,
/// normalizes to `/`. Trailing-separator-ness survives resolution for
/// non-root results.
pub fn normalize(path: &str) -> String {
    let directory_shaped = !path.is_empty() && path.ends_with(SEPARATOR);
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }
    if stack.is_empty() {
        return "/".to_string();
    }
    let joined = stack.join("/");
    if directory_shaped {
        add_trailing_separator(&joined)
    } else {
        joined
    }
}

/// The directory-shaped path containing `path`'s last segment.
///
/// The parent of a single top-level segment is `/`; the parent of the
/// root is the empty string.
pub fn parent(path: &str) -> String {
    if is_root(path) {
        return String::new();
    }
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(idx) => trimmed[..=idx].to_string(),
        None => "/".to_string(),
    }
}

/// Semantic path equality: canonical form, then `.`/`..` resolution.
pub fn compare(a: &str, b: &str) -> bool {
    normalize(&to_unix(a)) == normalize(&to_unix(b))
}

/// Trim separators from a single path segment.
///
/// The segment is required; `None` is an error.
pub fn normalize_part(part: Option<&str>) -> Result<String> {
    let part = part.ok_or(PathError::MissingSegment)?;
    Ok(part.trim_matches(SEPARATOR).to_string())
}
