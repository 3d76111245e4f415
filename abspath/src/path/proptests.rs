//! Property-based tests for path normalization and resolution.
//!
//! The unit tests pin the documented examples; this module pins the
//! algebraic properties the rest of the crate leans on, in particular the
//! claims that the fast path and the conditional renormalization in
//! resolution are optimizations with no observable effect.

use proptest::prelude::*;

use super::normalize::{normalize_absolute, normalize_relative};
use super::types::AbsolutePath;

// Strategy for single real path components (no separators, never `.`/`..`)
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

// Raw absolute path strings, messy on purpose: empty components, dots,
// parent references, and an optional trailing separator.
fn raw_absolute_strategy() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        Just(String::new()),
        Just(".".to_string()),
        Just("..".to_string()),
        component_strategy(),
    ];
    (prop::collection::vec(part, 0..8), any::<bool>()).prop_map(|(parts, trailing)| {
        let mut raw = format!("/{}", parts.join("/"));
        if trailing && !raw.ends_with('/') {
            raw.push('/');
        }
        raw
    })
}

// Raw relative path strings, same component mix without the leading `/`.
fn raw_relative_strategy() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        component_strategy(),
    ];
    prop::collection::vec(part, 0..8).prop_map(|parts| parts.join("/"))
}

// Already-normalized absolute paths, built from clean components.
fn absolute_path_strategy() -> impl Strategy<Value = AbsolutePath> {
    prop::collection::vec(component_strategy(), 0..8)
        .prop_map(|parts| AbsolutePath::root().appending(parts))
}

// Reference implementation of the absolute normalization: the same
// component fold with the fast path stripped out.
fn normalize_absolute_reference(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: a second pass never changes anything.
    #[test]
    fn absolute_normalization_idempotent(raw in raw_absolute_strategy()) {
        let once = normalize_absolute(&raw);
        prop_assert_eq!(normalize_absolute(&once), once);
    }

    // Normalized absolute paths have the canonical shape: a leading
    // separator, no empty components, and no `.`/`..` components at all.
    #[test]
    fn absolute_normalization_shape(raw in raw_absolute_strategy()) {
        let normalized = normalize_absolute(&raw);
        prop_assert!(normalized.starts_with('/'));
        if normalized != "/" {
            prop_assert!(!normalized.ends_with('/'));
            for part in normalized[1..].split('/') {
                prop_assert!(!part.is_empty());
                prop_assert_ne!(part, ".");
                prop_assert_ne!(part, "..");
            }
        }
    }

    // The fast-path check never skips input the full fold would change.
    #[test]
    fn absolute_fast_path_agrees_with_reference(raw in raw_absolute_strategy()) {
        prop_assert_eq!(normalize_absolute(&raw), normalize_absolute_reference(&raw));
    }

    // A trailing separator never affects the outcome.
    #[test]
    fn absolute_trailing_separator_is_irrelevant(path in absolute_path_strategy()) {
        let with_trailing = format!("{}/", path.as_str());
        prop_assert_eq!(normalize_absolute(&with_trailing), path.as_str());
    }

    // Relative normalization keeps `..` only as a leading run; after the
    // first real component, every `..` has something to cancel.
    #[test]
    fn relative_normalization_shape(raw in raw_relative_strategy()) {
        let normalized = normalize_relative(&raw);
        prop_assert!(!normalized.is_empty());
        prop_assert!(!normalized.starts_with('/'));
        if normalized != "." {
            let mut seen_real = false;
            for part in normalized.split('/') {
                prop_assert!(!part.is_empty());
                prop_assert_ne!(part, ".");
                if part == ".." {
                    prop_assert!(!seen_real, "`..` after a real component in {normalized:?}");
                } else {
                    seen_real = true;
                }
            }
        }
    }

    #[test]
    fn relative_normalization_idempotent(raw in raw_relative_strategy()) {
        let once = normalize_relative(&raw);
        prop_assert_eq!(normalize_relative(&once), once);
    }

    // Resolution's conditional renormalization is an optimization only:
    // the result always equals brute-force normalization of the
    // concatenation.
    #[test]
    fn resolve_agrees_with_concatenation(
        base in absolute_path_strategy(),
        fragment in raw_relative_strategy(),
    ) {
        let resolved = AbsolutePath::resolve(&fragment, &base);
        let concatenated = format!("{}/{fragment}", base.as_str());
        prop_assert_eq!(resolved.as_str(), normalize_absolute(&concatenated));
    }

    // An absolute fragment makes the base irrelevant.
    #[test]
    fn resolve_absolute_fragment_ignores_base(
        base in absolute_path_strategy(),
        other in absolute_path_strategy(),
    ) {
        let resolved = AbsolutePath::resolve(other.as_str(), &base);
        prop_assert_eq!(resolved, other);
    }

    // Components reassemble into the canonical string.
    #[test]
    fn components_round_trip(path in absolute_path_strategy()) {
        let components: Vec<&str> = path.components().collect();
        prop_assert_eq!(components[0], "/");
        let rebuilt = format!("/{}", components[1..].join("/"));
        prop_assert_eq!(rebuilt, path.as_str());
    }

    // Walking up one level per component always reaches the root, and the
    // root stays fixed from there on.
    #[test]
    fn ancestor_terminates_at_root(path in absolute_path_strategy(), extra in 0..64usize) {
        let depth = path.components().count();
        prop_assert_eq!(path.ancestor(depth + extra), AbsolutePath::root());
    }

    // Appending a real component and navigating back up is a no-op.
    #[test]
    fn appending_then_parent_is_identity(
        path in absolute_path_strategy(),
        name in component_strategy(),
    ) {
        prop_assert_eq!(path.appending([&name]).parent(), path);
    }

    // The string form round-trips through the trusting constructor.
    #[test]
    fn string_round_trip(path in absolute_path_strategy()) {
        prop_assert_eq!(AbsolutePath::new(path.as_str()), path);
    }
}
