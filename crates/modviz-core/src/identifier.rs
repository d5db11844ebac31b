//! Node identifiers using string interning for efficient storage and comparison
//!
//! Every cluster and node in a diagram is keyed by a flat string that encodes
//! the full nesting path of the declaration it represents. This module
//! provides the [`Id`] type that builds those strings.
//!
//! # Scheme
//!
//! A nested identifier is `path + "÷" + name`, or just `name` at the root.
//! Every `/` in the result is replaced by `|`, since the renderer treats
//! slashes in node names as path syntax.
//!
//! Distinct slash-free `(path, name)` pairs always produce distinct
//! identifiers. Two collisions are known and accepted:
//!
//! - `/` and `|` alias each other, so `"A/B"` and `"A|B"` share an identifier.
//! - A name that itself contains `÷` can alias a nested path.

use std::{
    fmt,
    sync::{Mutex, OnceLock, PoisonError},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

use crate::model::QualifiedName;

/// Separator placed between path segments of a nested identifier.
pub const PATH_SEPARATOR: char = '÷';

/// Replacement for `/` characters in identifiers.
pub const SLASH_REPLACEMENT: char = '|';

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut interner)
}

fn sanitize(raw: &str) -> String {
    raw.replace('/', &SLASH_REPLACEMENT.to_string())
}

/// Interned node identifier encoding a declaration's nesting path.
///
/// # Examples
///
/// ```
/// use modviz_core::identifier::Id;
///
/// let app = Id::root().create_nested("App");
/// let widget = app.create_nested("Widget");
/// assert_eq!(widget, "App÷Widget");
///
/// // Slashes are replaced
/// assert_eq!(Id::new("io/fs"), "io|fs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` for a top-level name.
    ///
    /// Equivalent to `Id::root().create_nested(name)`.
    pub fn new(name: &str) -> Self {
        let sanitized = sanitize(name);
        with_interner(|interner| Self(interner.get_or_intern(sanitized)))
    }

    /// The empty path that top-level declarations are nested under.
    pub fn root() -> Self {
        Self::new("")
    }

    /// Returns `true` for the empty root path.
    pub fn is_root(&self) -> bool {
        *self == ""
    }

    /// Creates the identifier of `name` declared under this path.
    ///
    /// # Arguments
    ///
    /// * `name` - The declaration name to append.
    ///
    /// # Examples
    ///
    /// ```
    /// use modviz_core::identifier::Id;
    ///
    /// let shapes = Id::new("Shapes");
    /// assert_eq!(shapes.create_nested("Base"), "Shapes÷Base");
    /// assert_eq!(Id::root().create_nested("Shapes"), shapes);
    /// ```
    pub fn create_nested(&self, name: &str) -> Self {
        with_interner(|interner| {
            let path = interner.resolve(self.0).unwrap_or_default();
            let raw = if path.is_empty() {
                name.to_string()
            } else {
                format!("{path}{PATH_SEPARATOR}{name}")
            };
            Self(interner.get_or_intern(sanitize(&raw)))
        })
    }

    /// Folds a qualified name into an identifier, starting from the root.
    ///
    /// The result never depends on where the referencing declaration lives.
    ///
    /// # Examples
    ///
    /// ```
    /// use modviz_core::{identifier::Id, model::QualifiedName};
    ///
    /// let base = QualifiedName::new(["Shapes", "Base"]);
    /// assert_eq!(Id::from_qualified(&base), "Shapes÷Base");
    /// ```
    pub fn from_qualified(name: &QualifiedName) -> Self {
        name.parts()
            .iter()
            .fold(Self::root(), |path, part| path.create_nested(part))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = with_interner(|interner| interner.resolve(self.0).map(str::to_owned));
        write!(f, "{}", value.unwrap_or_default())
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("Widget");
        let id2 = Id::new("Widget");
        let id3 = Id::new("Gadget");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "Widget");
    }

    #[test]
    fn test_root_is_empty() {
        assert!(Id::root().is_root());
        assert_eq!(Id::root(), "");
        assert!(!Id::new("App").is_root());
    }

    #[test]
    fn test_create_nested_from_root_has_no_separator() {
        assert_eq!(Id::root().create_nested("App"), "App");
    }

    #[test]
    fn test_deep_nesting() {
        let id = Id::root()
            .create_nested("app")
            .create_nested("ui")
            .create_nested("Button");

        assert_eq!(id, "app÷ui÷Button");
    }

    #[test]
    fn test_slashes_are_replaced() {
        assert_eq!(Id::new("src/lib"), "src|lib");
        assert_eq!(Id::new("src").create_nested("a/b"), "src÷a|b");
    }

    #[test]
    fn test_slash_and_pipe_collide() {
        // Documented aliasing: both spellings map onto the same identifier.
        assert_eq!(Id::new("A/B"), Id::new("A|B"));
    }

    #[test]
    fn test_path_with_empty_name_is_distinct() {
        let nested = Id::new("A").create_nested("B");
        let slashed = Id::new("A/B").create_nested("");

        assert_eq!(slashed, "A|B÷");
        assert_ne!(nested, slashed);
    }

    #[test]
    fn test_from_qualified() {
        let name = QualifiedName::new(["Shapes", "Base"]);
        let expected = Id::root().create_nested("Shapes").create_nested("Base");

        assert_eq!(Id::from_qualified(&name), expected);
        assert_eq!(Id::from_qualified(&QualifiedName::new(["Solo"])), "Solo");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("Geometry").create_nested("Point");
        assert_eq!(format!("{id}"), "Geometry÷Point");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(Id::new("key1"), "value1");
        map.insert(Id::new("key2"), "value2");

        assert_eq!(map.get(&Id::new("key1")), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn segment_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z_][A-Za-z0-9_]{0,8}"
    }

    proptest! {
        #[test]
        fn nested_ids_are_injective(
            a in prop::collection::vec(segment_strategy(), 1..4),
            b in prop::collection::vec(segment_strategy(), 1..4),
        ) {
            let fold = |parts: &[String]| {
                parts.iter().fold(Id::root(), |path, part| path.create_nested(part))
            };
            prop_assert_eq!(fold(&a[..]) == fold(&b[..]), a == b);
        }

        #[test]
        fn rendered_id_contains_no_slash(parts in prop::collection::vec("[a-z/]{1,6}", 1..4)) {
            let id = parts.iter().fold(Id::root(), |path, part| path.create_nested(part));
            prop_assert!(!id.to_string().contains('/'));
        }
    }
}
