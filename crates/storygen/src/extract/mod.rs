//! Static analysis of component sources.
//!
//! Both extractors are pure functions of the source text: each one parses the
//! text on its own arena, walks the tree once and drops it. A parse failure is
//! never fatal; the infallible entry points log it and degrade to "nothing
//! found", while the `try_` variants hand the error back so the generator can
//! report it to its diagnostic sink first.

mod properties;
mod tag;

use indexmap::IndexSet;
use oxc_ast::ast::{Decorator, Expression};

pub use properties::{extract_properties, extract_properties_with, try_extract_properties};
pub use tag::{extract_tag, extract_tag_with, try_extract_tag};

/// Default name of the component registration decorator/function.
pub const DEFAULT_REGISTRATION_FUNCTION: &str = "customElement";

/// Default decorator names marking a reactive field.
pub const DEFAULT_REACTIVE_DECORATORS: [&str; 2] = ["property", "state"];

/// Options controlling extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Callee identifier of the registration call.
    pub registration_function: String,
    /// Decorators that mark a field as reactive.
    pub markers: ReactiveMarkers,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            registration_function: DEFAULT_REGISTRATION_FUNCTION.to_string(),
            markers: ReactiveMarkers::default(),
        }
    }
}

/// Set of decorator names that qualify a class field as reactive.
///
/// Matching is exact and case-sensitive, and only applies to decorators of
/// the shape `@name(...)`. Bare `@name` and member callees like `@lit.name()`
/// never qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactiveMarkers {
    names: IndexSet<String>,
}

impl ReactiveMarkers {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns `true` when any decorator in the list is a recognized marker.
    pub fn is_reactive(&self, decorators: &[Decorator<'_>]) -> bool {
        decorators.iter().any(|decorator| self.marks(decorator))
    }

    fn marks(&self, decorator: &Decorator<'_>) -> bool {
        let Expression::CallExpression(call) = &decorator.expression else {
            return false;
        };
        match &call.callee {
            Expression::Identifier(ident) => self.contains(ident.name.as_str()),
            _ => false,
        }
    }
}

impl Default for ReactiveMarkers {
    fn default() -> Self {
        Self::new(DEFAULT_REACTIVE_DECORATORS)
    }
}
