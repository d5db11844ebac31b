//! Loading object models from TOML model files.
//!
//! A model file holds a list of top-level modules whose fields mirror the
//! [`modviz_core::model`] records:
//!
//! ```toml
//! [[modules]]
//! name = "App"
//! methods = [{ name = "main" }]
//!
//! [[modules.classes]]
//! name = "Widget"
//! extends = ["Shapes", "Base"]
//! properties = [{ name = "value", has_getter = true }]
//! ```

use log::debug;
use serde::Deserialize;

use modviz_core::model::Module;

use crate::ModvizError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelFile {
    #[serde(default)]
    modules: Vec<Module>,
}

/// Parses and validates a model file.
///
/// # Errors
///
/// Returns [`ModvizError::ModelSyntax`] for malformed TOML or unknown
/// fields, and [`ModvizError::Model`] when a declaration has an empty name.
pub(crate) fn parse(source: &str) -> Result<Vec<Module>, ModvizError> {
    let file: ModelFile = toml::from_str(source)
        .map_err(|err| ModvizError::new_model_syntax_error(&err, source))?;

    for module in &file.modules {
        module.validate()?;
    }

    debug!(modules = file.modules.len(); "Model file loaded");
    Ok(file.modules)
}

#[cfg(test)]
mod tests {
    use modviz_core::model::{Declaration, ElementKind, ModelError, Visibility};

    use super::*;

    #[test]
    fn test_parse_nested_model() {
        let modules = parse(
            r#"
            [[modules]]
            name = "App"
            methods = [{ name = "main" }]

            [[modules.modules]]
            name = "internal"
            visibility = "private"

            [[modules.classes]]
            name = "Widget"
            extends = ["Shapes", "Base"]

            [[modules]]
            name = "Shapes"
            "#,
        )
        .expect("valid model");

        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].modules()[0].visibility(), Visibility::Private);
        assert_eq!(modules[0].classes()[0].name(), "Widget");
        assert_eq!(modules[1].name(), "Shapes");
    }

    #[test]
    fn test_empty_file_has_no_modules() {
        assert!(parse("").expect("empty model").is_empty());
    }

    #[test]
    fn test_syntax_error_carries_span() {
        let source = "[[modules]]\nname = \n";
        match parse(source) {
            Err(ModvizError::ModelSyntax { span, src, .. }) => {
                assert!(span.is_some());
                assert_eq!(src, source);
            }
            other => panic!("expected ModelSyntax, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_visibility_is_rejected() {
        let source = "[[modules]]\nname = \"App\"\nvisibility = \"internal\"\n";
        assert!(matches!(parse(source), Err(ModvizError::ModelSyntax { .. })));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let source = "[[modules]]\nname = \"App\"\n[[modules.classes]]\nname = \"\"\n";
        match parse(source) {
            Err(ModvizError::Model(ModelError::EmptyName { kind, path })) => {
                assert_eq!(kind, ElementKind::Class);
                assert_eq!(path, "App");
            }
            other => panic!("expected empty name error, got {other:?}"),
        }
    }
}
