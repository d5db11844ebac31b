//! Modviz Core Types and Definitions
//!
//! This crate provides the foundational types shared by the modviz diagram
//! builder. It includes:
//!
//! - **Model**: The structural object model of a codebase ([`model`] module):
//!   modules, classes, methods and properties tagged with [`model::Visibility`]
//! - **Identifiers**: Interned, path-encoding node identifiers ([`identifier::Id`])

pub mod identifier;
pub mod model;
