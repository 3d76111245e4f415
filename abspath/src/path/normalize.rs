//! Pure path normalization functions.
//!
//! These are the leaf algorithms of the crate: they take raw path strings
//! and produce canonical forms with no empty, `.`, or resolvable `..`
//! components. Both functions assume their input has already been
//! classified (absolute vs. relative); classification lives in
//! [`validate`](super::validate).

/// Normalize an already-classified absolute path string.
///
/// Splits on `/`, drops empty and `.` components, and folds `..`
/// components into the component before them. A `..` that reaches the
/// root is dropped silently: there is nothing above `/` to navigate to,
/// so the root absorbs it rather than erroring.
///
/// The result always starts with `/` and never ends with a separator;
/// when every component cancels out the result is exactly `"/"`.
///
/// Already-normalized input is returned unchanged without reallocation.
///
/// # Panics
///
/// Panics if `path` does not start with `/`. Classify untrusted input
/// with [`validate_absolute`](super::validate::validate_absolute) first.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::normalize_absolute;
///
/// assert_eq!(normalize_absolute("/path/to/a/b/../c"), "/path/to/a/c");
/// assert_eq!(normalize_absolute("/../a"), "/a");
/// assert_eq!(normalize_absolute("//path//"), "/path");
/// assert_eq!(normalize_absolute("/"), "/");
/// ```
#[must_use]
pub fn normalize_absolute(path: &str) -> String {
    assert!(
        path.starts_with('/'),
        "failure normalizing '{path}': absolute paths must start with '/'"
    );

    // Fast path: input that contains no doubled separator, no component
    // starting with '.', and no trailing separator is already canonical.
    if !may_need_normalization(path) {
        return path.to_string();
    }

    // Fold components onto a stack, resolving `..` as we go.
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                // Cancel the previous component, or absorb at the root.
                parts.pop();
            }
            _ => parts.push(part),
        }
    }

    if parts.is_empty() {
        return "/".to_string();
    }

    // One separator per component, counted up front to reassemble with a
    // single allocation.
    let capacity = parts.iter().map(|part| part.len()).sum::<usize>() + parts.len();
    let mut result = String::with_capacity(capacity);
    for part in parts {
        result.push('/');
        result.push_str(part);
    }
    result
}

/// Normalize an already-classified relative path string.
///
/// Splitting and dropping work as in [`normalize_absolute`], but `..`
/// resolves differently: it cancels the previous component only when that
/// component is itself not `..`. With no base to resolve against, a
/// leading run of `..` components must survive verbatim.
///
/// When everything cancels out the result is exactly `"."`, the no-op
/// relative path; resolving it against a base yields the base unchanged.
///
/// # Panics
///
/// Panics if `path` starts with `/`. Classify untrusted input with
/// [`validate_relative`](super::validate::validate_relative) first.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::normalize_relative;
///
/// assert_eq!(normalize_relative("Sources/./File"), "Sources/File");
/// assert_eq!(normalize_relative("../Tests"), "../Tests");
/// assert_eq!(normalize_relative("../../a/../b"), "../../b");
/// assert_eq!(normalize_relative("a/.."), ".");
/// ```
#[must_use]
pub fn normalize_relative(path: &str) -> String {
    assert!(
        !path.starts_with('/'),
        "failure normalizing '{path}': relative paths must not start with '/'"
    );

    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                // A real previous component cancels out.
                Some(&prev) if prev != ".." => {
                    parts.pop();
                }
                // Nothing to cancel: keep the `..` literally.
                _ => parts.push(part),
            },
            _ => parts.push(part),
        }
    }

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Fast check for whether an absolute path string might need
/// normalization.
///
/// Flags a doubled separator, a component starting with `.`, or a
/// trailing separator. False positives only cost the slow path; the
/// check never misses input the slow path would change (pinned by the
/// property suite).
pub(crate) fn may_need_normalization(path: &str) -> bool {
    let mut last = b'0';
    for &c in path.as_bytes() {
        match c {
            b'/' if last == b'/' => return true,
            b'.' if last == b'/' => return true,
            _ => {}
        }
        last = c;
    }
    last == b'/'
}
