//! Structural object model of a codebase.
//!
//! The model is a tree: a [`Module`] owns its nested modules, its classes and
//! its free functions. Classes own their methods and properties. Every
//! declaration carries a [`Visibility`].
//!
//! The model is produced by an external analysis step and is read-only from
//! the diagram builder's point of view. All records implement
//! [`serde::Deserialize`] so a model can also be loaded from a file.
//!
//! # Example
//!
//! ```
//! use modviz_core::model::{Class, Method, Module, Property, Visibility};
//!
//! let app = Module::new("App").with_class(
//!     Class::new("Widget")
//!         .with_method(Method::new("render"))
//!         .with_method(Method::new("layout").with_visibility(Visibility::Private))
//!         .with_property(Property::new("value").with_getter().with_setter()),
//! );
//!
//! assert_eq!(app.classes()[0].methods().len(), 2);
//! assert!(app.validate().is_ok());
//! ```

use std::fmt;

use log::trace;
use serde::Deserialize;
use thiserror::Error;

/// Access level of a declaration.
///
/// Only [`Visibility::Public`] members are shown in diagram labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Returns the UML-style symbol: `+`, `~` or `-`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Public => "+",
            Self::Protected => "~",
            Self::Private => "-",
        }
    }

    /// Returns `true` for [`Visibility::Public`].
    pub fn is_public(self) -> bool {
        self == Self::Public
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Name and visibility shared by every declaration in the model.
pub trait Declaration {
    /// The declared name, used both for display and identity.
    fn name(&self) -> &str;

    /// The declared access level.
    fn visibility(&self) -> Visibility;

    /// Shorthand for `self.visibility().is_public()`.
    fn is_public(&self) -> bool {
        self.visibility().is_public()
    }
}

/// Kind tag of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Module,
    Class,
    Method,
    Property,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Module => "module",
            Self::Class => "class",
            Self::Method => "method",
            Self::Property => "property",
        };
        f.write_str(name)
    }
}

/// A borrowed reference to any declaration in the model.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
    Module(&'a Module),
    Class(&'a Class),
    Method(&'a Method),
    Property(&'a Property),
}

impl<'a> Element<'a> {
    /// Returns the kind of declaration this element refers to.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Module(_) => ElementKind::Module,
            Self::Class(_) => ElementKind::Class,
            Self::Method(_) => ElementKind::Method,
            Self::Property(_) => ElementKind::Property,
        }
    }

    /// Returns the declarations directly owned by this element.
    ///
    /// Modules yield their modules, classes and methods in that order;
    /// classes yield methods then properties. Members have no children.
    pub fn children(&self) -> Vec<Element<'a>> {
        match *self {
            Self::Module(module) => module
                .modules
                .iter()
                .map(Element::Module)
                .chain(module.classes.iter().map(Element::Class))
                .chain(module.methods.iter().map(Element::Method))
                .collect(),
            Self::Class(class) => class
                .methods
                .iter()
                .map(Element::Method)
                .chain(class.properties.iter().map(Element::Property))
                .collect(),
            Self::Method(_) | Self::Property(_) => Vec::new(),
        }
    }
}

impl Declaration for Element<'_> {
    fn name(&self) -> &str {
        match self {
            Self::Module(module) => module.name(),
            Self::Class(class) => class.name(),
            Self::Method(method) => method.name(),
            Self::Property(property) => property.name(),
        }
    }

    fn visibility(&self) -> Visibility {
        match self {
            Self::Module(module) => module.visibility(),
            Self::Class(class) => class.visibility(),
            Self::Method(method) => method.visibility(),
            Self::Property(property) => property.visibility(),
        }
    }
}

/// Structural errors in a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{kind} declared in `{path}` has an empty name")]
    EmptyName { kind: ElementKind, path: String },
}

/// Ordered name parts denoting a possibly nested path, e.g. `Shapes.Base`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName {
    parts: Vec<String>,
}

impl QualifiedName {
    /// Creates a qualified name from its parts, outermost first.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the name parts, outermost first.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("."))
    }
}

/// A reference from a module to another module or class by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Dependency {
    name: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The referenced name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A free function or class method.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Method {
    name: String,
    #[serde(default)]
    visibility: Visibility,
}

impl Method {
    /// Creates a public method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

impl Declaration for Method {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// A class property with optional accessors.
///
/// A property with neither accessor is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Property {
    name: String,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    has_getter: bool,
    #[serde(default)]
    has_setter: bool,
}

impl Property {
    /// Creates a public property without accessors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            has_getter: false,
            has_setter: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_getter(mut self) -> Self {
        self.has_getter = true;
        self
    }

    pub fn with_setter(mut self) -> Self {
        self.has_setter = true;
        self
    }

    pub fn has_getter(&self) -> bool {
        self.has_getter
    }

    pub fn has_setter(&self) -> bool {
        self.has_setter
    }
}

impl Declaration for Property {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// A type declaration with members and an optional base class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Class {
    name: String,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    methods: Vec<Method>,
    #[serde(default)]
    properties: Vec<Property>,
    #[serde(default)]
    extends: Option<QualifiedName>,
}

impl Class {
    /// Creates a public class with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            methods: Vec::new(),
            properties: Vec::new(),
            extends: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Sets the base class reference.
    pub fn with_extends(mut self, base: QualifiedName) -> Self {
        self.extends = Some(base);
        self
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the base class reference, if any.
    pub fn extends(&self) -> Option<&QualifiedName> {
        self.extends.as_ref()
    }
}

impl Declaration for Class {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// A namespace owning nested modules, classes and free functions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Module {
    name: String,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    modules: Vec<Module>,
    #[serde(default)]
    classes: Vec<Class>,
    #[serde(default)]
    methods: Vec<Method>,
    #[serde(default)]
    dependencies: Vec<Dependency>,
}

impl Module {
    /// Creates an empty public module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            modules: Vec::new(),
            classes: Vec::new(),
            methods: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Appends a nested module.
    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    /// Appends a free function declared at module scope.
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Checks the structural invariants of this module tree.
    ///
    /// Every declaration must have a non-empty name. Identifier collisions
    /// between siblings are not detected.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyName`] for the first unnamed declaration
    /// found in declaration order.
    pub fn validate(&self) -> Result<(), ModelError> {
        // Explicit stack so arbitrarily deep trees cannot overflow.
        let mut pending = vec![(String::from("<root>"), Element::Module(self))];

        while let Some((path, element)) = pending.pop() {
            if element.name().is_empty() {
                return Err(ModelError::EmptyName {
                    kind: element.kind(),
                    path,
                });
            }

            let child_path = if path == "<root>" {
                element.name().to_string()
            } else {
                format!("{path}.{}", element.name())
            };
            let children = element.children();
            pending.extend(
                children
                    .into_iter()
                    .rev()
                    .map(|child| (child_path.clone(), child)),
            );
        }

        trace!(module = self.name.as_str(); "Module validated");
        Ok(())
    }
}

impl Declaration for Module {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}
