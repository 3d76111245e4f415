//! The absolute path value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;

use super::normalize::{normalize_absolute, normalize_relative};
use super::validate::{validate_absolute, validate_relative};

/// A validated, always-absolute filesystem path.
///
/// An `AbsolutePath` is a simple representation of a location on a file
/// system: it guarantees a canonical absolute string, and nothing about
/// the item the path points at. The stored string always starts with `/`
/// and contains no empty, `.`, or resolvable `..` components; a `..` that
/// would climb above the root has been absorbed during normalization.
///
/// Values are immutable once constructed and only ever built through the
/// normalizer, so every instance upholds the invariant. Equality and
/// hashing are structural over the canonical string.
///
/// # Creating paths
///
/// Two distinct entry points with distinct contracts:
///
/// - [`AbsolutePath::new`] trusts its input to be absolute and panics
///   otherwise. Use it for compile-time-known literals.
/// - [`AbsolutePath::try_new`] validates first and returns a typed error.
///   Use it for anything user-supplied.
///
/// # Examples
///
/// ```
/// use abspath::AbsolutePath;
///
/// let git = AbsolutePath::new("/usr/bin/git");
/// assert_eq!(git.basename(), "git");
/// assert_eq!(git.parent().as_str(), "/usr/bin");
///
/// let err = AbsolutePath::try_new("usr/bin/git").unwrap_err();
/// assert_eq!(err.offending_path(), "usr/bin/git");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AbsolutePath {
    raw: String,
}

impl AbsolutePath {
    /// Creates an `AbsolutePath` from a trusted absolute path string,
    /// normalizing it if needed.
    ///
    /// # Panics
    ///
    /// Panics if `path` does not start with `/`. This constructor is for
    /// input the caller already knows is absolute (typically literals);
    /// use [`AbsolutePath::try_new`] for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::new("/path/to//dir/").as_str(), "/path/to/dir");
    /// assert_eq!(AbsolutePath::new("/../a").as_str(), "/a");
    /// ```
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            raw: normalize_absolute(path),
        }
    }

    /// Creates an `AbsolutePath` from an untrusted string, validating it
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`PathValidationError`](crate::PathValidationError) when
    /// the string starts with `~` or does not start with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// assert!(AbsolutePath::try_new("/usr/bin/git").is_ok());
    /// assert!(AbsolutePath::try_new("~/bin/git").is_err());
    /// assert!(AbsolutePath::try_new("bin/git").is_err());
    /// ```
    pub fn try_new(path: &str) -> Result<Self> {
        validate_absolute(path).map(|raw| Self { raw })
    }

    /// Creates an `AbsolutePath` from a path string resolved against a
    /// base path.
    ///
    /// An absolute `fragment` ignores `base` entirely; anything else is
    /// normalized as a relative fragment and appended to `base`, with
    /// leading `..` components consuming base components.
    ///
    /// This constructor trusts its input the way [`AbsolutePath::new`]
    /// does; see [`AbsolutePath::try_resolve`] for the validating
    /// counterpart.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// let base = AbsolutePath::new("/MyProject");
    /// assert_eq!(AbsolutePath::resolve("Sources", &base).as_str(), "/MyProject/Sources");
    /// assert_eq!(AbsolutePath::resolve("/Absolute", &base).as_str(), "/Absolute");
    ///
    /// let sources = AbsolutePath::new("/path/to/repo/Sources");
    /// assert_eq!(
    ///     AbsolutePath::resolve("../Tests", &sources).as_str(),
    ///     "/path/to/repo/Tests"
    /// );
    /// ```
    #[must_use]
    pub fn resolve(fragment: &str, base: &AbsolutePath) -> Self {
        if fragment.starts_with('/') {
            Self::new(fragment)
        } else {
            base.joining_fragment(&normalize_relative(fragment))
        }
    }

    /// Creates an `AbsolutePath` from an untrusted path string resolved
    /// against a base path, validating the input first.
    ///
    /// # Errors
    ///
    /// Returns [`PathValidationError`](crate::PathValidationError) when
    /// the fragment starts with `~` (never expanded, neither as an
    /// absolute nor as a relative input).
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// let base = AbsolutePath::new("/MyProject");
    /// assert!(AbsolutePath::try_resolve("Sources", &base).is_ok());
    /// assert!(AbsolutePath::try_resolve("~", &base).is_err());
    /// ```
    pub fn try_resolve(fragment: &str, base: &AbsolutePath) -> Result<Self> {
        if fragment.starts_with('/') {
            Self::try_new(fragment)
        } else {
            Ok(base.joining_fragment(&validate_relative(fragment)?))
        }
    }

    /// The canonical string form of the path.
    ///
    /// Never ends with a separator, except for the root path, which is
    /// exactly `"/"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the path and returns its canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }

    /// Whether this path is the root directory.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.raw == "/"
    }

    /// The last component of the path.
    ///
    /// The root path has no real last component, so its basename is
    /// defined as `"/"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::new("/path/to/file.swift").basename(), "file.swift");
    /// assert_eq!(AbsolutePath::new("/path/to/tar.gz.zip").basename(), "tar.gz.zip");
    /// assert_eq!(AbsolutePath::root().basename(), "/");
    /// ```
    #[must_use]
    pub fn basename(&self) -> &str {
        if self.is_root() {
            return "/";
        }
        match self.raw.rfind('/') {
            Some(idx) => &self.raw[idx + 1..],
            None => &self.raw,
        }
    }

    /// Iterates over the path components.
    ///
    /// The root marker counts as the first component, so the number of
    /// components reflects depth including the root: the root path yields
    /// just `["/"]`, and `/usr/bin/git` yields
    /// `["/", "usr", "bin", "git"]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// let git = AbsolutePath::new("/usr/bin/git");
    /// let components: Vec<&str> = git.components().collect();
    /// assert_eq!(components, ["/", "usr", "bin", "git"]);
    ///
    /// let root_path = AbsolutePath::root();
    /// let root: Vec<&str> = root_path.components().collect();
    /// assert_eq!(root, ["/"]);
    /// ```
    pub fn components(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once("/").chain(self.raw.split('/').filter(|part| !part.is_empty()))
    }

    /// The containing directory of this path.
    ///
    /// The root directory is its own parent: navigating upward never
    /// fails and never escapes `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::new("/usr/bin/git").parent().as_str(), "/usr/bin");
    /// assert_eq!(AbsolutePath::new("/usr").parent().as_str(), "/");
    /// assert_eq!(AbsolutePath::root().parent(), AbsolutePath::root());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        match self.raw.rfind('/') {
            Some(0) | None => Self::root(),
            Some(idx) => Self {
                raw: self.raw[..idx].to_string(),
            },
        }
    }

    /// The ancestor `depth` levels up from this path.
    ///
    /// Applies [`parent`](AbsolutePath::parent) `depth` times. Because the
    /// root is a fixed point of `parent`, any `depth` is valid, including
    /// `0` (the path itself) and values larger than the path's actual
    /// depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// let path = AbsolutePath::new("/path/to/c/../b");
    /// assert_eq!(path.ancestor(2).as_str(), "/path");
    /// assert_eq!(path.ancestor(100), AbsolutePath::root());
    /// assert_eq!(AbsolutePath::root().ancestor(100), AbsolutePath::root());
    /// ```
    #[must_use]
    pub fn ancestor(&self, depth: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..depth {
            if current.is_root() {
                break;
            }
            current = current.parent();
        }
        current
    }

    /// The extension of the basename, without the leading dot.
    ///
    /// An extension is a `.`-delimited suffix of the basename. A dot at
    /// the very start of the basename does not introduce an extension,
    /// and a bare trailing dot leaves the basename without one.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::new("/path/to/file.swift").extension(), Some("swift"));
    /// assert_eq!(AbsolutePath::new("/path/to/file.tar.gz").extension(), Some("gz"));
    /// assert_eq!(AbsolutePath::new("/path/to/.hidden").extension(), None);
    /// assert_eq!(AbsolutePath::new("/path/to/dir").extension(), None);
    /// ```
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let base = self.basename();
        // The first character never starts an extension, dot or not.
        let first = base.chars().next()?;
        let rest = &base[first.len_utf8()..];
        let idx = rest.rfind('.')?;
        let ext = &rest[idx + 1..];
        if ext.is_empty() {
            None
        } else {
            Some(ext)
        }
    }

    /// Whether the basename has exactly the given extension.
    ///
    /// The query is compared without a dot; a query carrying its own
    /// leading dot never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// let file = AbsolutePath::new("/path/to/file.swift");
    /// assert!(file.has_extension("swift"));
    /// assert!(!file.has_extension(".swift"));
    /// assert!(AbsolutePath::new("/path/to/file.tar.gz").has_extension("gz"));
    /// assert!(!AbsolutePath::new("/path/to/swift").has_extension("swift"));
    /// ```
    #[must_use]
    pub fn has_extension(&self, extension: &str) -> bool {
        self.extension() == Some(extension)
    }

    /// Appends single path components and returns the result as a new
    /// path.
    ///
    /// Each component is appended in turn: `""` and `"."` are no-ops,
    /// `".."` navigates to the parent (absorbed at the root), and any
    /// other name becomes a new trailing component.
    ///
    /// # Panics
    ///
    /// Panics if a component contains a `/`. Components are single names,
    /// not path fragments; resolving a fragment is
    /// [`AbsolutePath::resolve`]'s job.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// let file = AbsolutePath::root().appending(["path", "to", "file.swift"]);
    /// assert_eq!(file.as_str(), "/path/to/file.swift");
    ///
    /// let sibling = AbsolutePath::new("/path").appending(["..", "otherPath"]);
    /// assert_eq!(sibling.as_str(), "/otherPath");
    /// ```
    #[must_use]
    pub fn appending<I>(&self, components: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        components
            .into_iter()
            .fold(self.clone(), |path, component| {
                path.appending_component(component.as_ref())
            })
    }

    /// Appends one path component and returns the result as a new path.
    ///
    /// # Panics
    ///
    /// Panics if `name` contains a `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::root().appending_component("usr").as_str(), "/usr");
    /// assert_eq!(AbsolutePath::new("/usr").appending_component("bin").as_str(), "/usr/bin");
    /// assert_eq!(AbsolutePath::new("/usr/bin").appending_component("..").as_str(), "/usr");
    /// ```
    #[must_use]
    pub fn appending_component(&self, name: &str) -> Self {
        assert!(!name.contains('/'), "'{name}' is not a single path component");

        match name {
            "" | "." => self.clone(),
            ".." => self.parent(),
            _ => {
                if self.is_root() {
                    Self {
                        raw: format!("/{name}"),
                    }
                } else {
                    Self {
                        raw: format!("{}/{name}", self.raw),
                    }
                }
            }
        }
    }

    /// Appends an already-normalized relative fragment.
    ///
    /// Both operands are normalized, so the concatenation only needs a
    /// renormalization pass when the fragment starts with `.`: that
    /// covers the no-op fragment `"."` and fragments with leading `..`
    /// components, the only normalized fragments that can interact with
    /// the base. Every other fragment concatenates into an
    /// already-canonical string.
    fn joining_fragment(&self, fragment: &str) -> Self {
        let mut joined = String::with_capacity(self.raw.len() + fragment.len() + 1);
        joined.push_str(&self.raw);
        if !self.is_root() {
            joined.push('/');
        }
        joined.push_str(fragment);

        if fragment.starts_with('.') {
            Self::new(&joined)
        } else {
            Self { raw: joined }
        }
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AbsolutePath").field(&self.raw).finish()
    }
}

impl AsRef<str> for AbsolutePath {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl FromStr for AbsolutePath {
    type Err = crate::PathValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(s)
    }
}

impl Serialize for AbsolutePath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for AbsolutePath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::try_new(&raw).map_err(serde::de::Error::custom)
    }
}
