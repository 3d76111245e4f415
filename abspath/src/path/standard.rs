//! Well-known UNIX paths.
//!
//! Every constant below the root is built with the appending algorithm
//! rather than from a hard-coded string, so the constants can never drift
//! from what [`AbsolutePath::appending`] produces.

use super::types::AbsolutePath;

impl AbsolutePath {
    /// The root directory, `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsolutePath;
    ///
    /// assert_eq!(AbsolutePath::root().as_str(), "/");
    /// assert!(AbsolutePath::root().is_root());
    /// ```
    #[must_use]
    pub fn root() -> Self {
        Self::new("/")
    }

    /// The `/usr` directory.
    #[must_use]
    pub fn usr() -> Self {
        Self::root().appending_component("usr")
    }

    /// The `/usr/bin` directory.
    #[must_use]
    pub fn bin() -> Self {
        Self::usr().appending_component("bin")
    }

    /// The `/usr/local` directory.
    #[must_use]
    pub fn local() -> Self {
        Self::usr().appending_component("local")
    }

    /// The `/usr/local/bin` directory.
    #[must_use]
    pub fn local_bin() -> Self {
        Self::local().appending_component("bin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_unix_paths() {
        assert_eq!(AbsolutePath::root().as_str(), "/");
        assert_eq!(AbsolutePath::usr().as_str(), "/usr");
        assert_eq!(AbsolutePath::bin().as_str(), "/usr/bin");
        assert_eq!(AbsolutePath::local().as_str(), "/usr/local");
        assert_eq!(AbsolutePath::local_bin().as_str(), "/usr/local/bin");
    }

    #[test]
    fn test_standard_paths_agree_with_appending() {
        assert_eq!(
            AbsolutePath::local_bin(),
            AbsolutePath::root().appending(["usr", "local", "bin"])
        );
    }
}
