#![deny(clippy::all)]

//! Storybook story generation for decorator-annotated web components.
//!
//! This crate provides:
//! - A parser façade over OXC for TypeScript component sources.
//! - Extractors for the registered tag name and the reactive fields of a component.
//! - A renderer producing a Storybook story module (and a JSON dump for inspection).
//! - A batch [`Generator`] that writes stories beside their sources, reporting
//!   through a pluggable [`DiagnosticSink`].
//! - A [`StoriesHook`] for running generation from a host build pipeline.
//!
//! # Example
//!
//! ```rust
//! use storygen::{extract_properties, extract_tag, render, RenderOptions};
//!
//! let source = r#"
//!     @customElement('my-widget')
//!     export class Widget extends LitElement {
//!         @property() label: string = 'Hi';
//!     }
//! "#;
//!
//! let tag = extract_tag(source).expect("registered");
//! let properties = extract_properties(source);
//! let story = render("widget", &tag, &properties, &RenderOptions::default());
//! assert!(story.contains("component: 'my-widget'"));
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod generator;
pub mod generators;
pub mod hook;
pub mod model;
pub mod parser;

pub use config::GeneratorConfig;
pub use diagnostics::{CollectingSink, DiagnosticSink, GenerationEvent, Severity, TracingSink};
pub use error::{Result, StorygenError};
pub use extract::{
    ExtractOptions, ReactiveMarkers, extract_properties, extract_properties_with, extract_tag,
    extract_tag_with, try_extract_properties, try_extract_tag,
};
pub use generator::{GenerationSummary, Generator, discover};
pub use generators::story::{RenderOptions, render, render_component};
pub use hook::{BuildHook, StoriesHook};
pub use model::{
    ComponentDescriptor, ControlKind, LiteralValue, PropertyDescriptor, PropertyMap, SemanticType,
};

#[cfg(feature = "json")]
pub use generators::json::render_json;
