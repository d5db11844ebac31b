//! Member label composition.
//!
//! Labels list public members one per line. Every line ends with the
//! Graphviz `\l` escape, which breaks the line and left-justifies it.

use modviz_core::model::{Declaration, Method, Property};

/// Graphviz escape for a left-justified line break.
pub(crate) const LINE_BREAK: &str = "\\l";

/// Formats the public `elements` one per line, in input order.
///
/// Returns an empty string when no element is public; callers must then
/// omit the block entirely.
pub(crate) fn combine_signatures<T, F>(elements: &[T], formatter: F) -> String
where
    T: Declaration,
    F: Fn(&T) -> String,
{
    elements
        .iter()
        .filter(|element| element.is_public())
        .map(|element| formatter(element) + LINE_BREAK)
        .collect()
}

/// `"<symbol> <name>()"`. Parameters and return types are not shown.
pub(crate) fn method_signature(method: &Method) -> String {
    format!("{} {}()", method.visibility().symbol(), method.name())
}

/// `"<symbol> <accessor> <name>"`.
///
/// The accessor is `get`, `set`, `get/set`, or empty when the property has
/// neither, in which case two spaces separate symbol and name.
pub(crate) fn property_signature(property: &Property) -> String {
    let accessor = match (property.has_getter(), property.has_setter()) {
        (true, true) => "get/set",
        (true, false) => "get",
        (false, true) => "set",
        (false, false) => "",
    };
    format!(
        "{} {} {}",
        property.visibility().symbol(),
        accessor,
        property.name()
    )
}
