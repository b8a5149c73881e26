use oxc_allocator::Allocator;
use oxc_ast::ast::{Argument, CallExpression, Expression};
use oxc_ast_visit::{Visit, walk};
use tracing::{debug, warn};

use super::ExtractOptions;
use crate::error::Result;
use crate::parser::{ParseOptions, parse};

/// Find the tag name passed to the registration call, using default options.
pub fn extract_tag(source: &str) -> Option<String> {
    extract_tag_with(source, &ExtractOptions::default())
}

/// Find the tag name passed to the registration call.
///
/// Parse failures are logged and reported as "no tag".
pub fn extract_tag_with(source: &str, options: &ExtractOptions) -> Option<String> {
    match try_extract_tag(source, options) {
        Ok(tag) => tag,
        Err(error) => {
            warn!("tag extraction skipped: {error}");
            None
        }
    }
}

/// Find the tag name passed to the registration call, surfacing parse errors.
///
/// Every call in the file is visited. When several qualify, the last one in
/// traversal order wins.
pub fn try_extract_tag(source: &str, options: &ExtractOptions) -> Result<Option<String>> {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, source, ParseOptions::typescript())?;

    let mut visitor = RegistrationVisitor {
        callee: &options.registration_function,
        tag: None,
    };
    visitor.visit_program(parsed.ast());
    Ok(visitor.tag)
}

struct RegistrationVisitor<'o> {
    callee: &'o str,
    tag: Option<String>,
}

impl<'o, 'ast> Visit<'ast> for RegistrationVisitor<'o> {
    fn visit_call_expression(&mut self, call: &CallExpression<'ast>) {
        if let Some(tag) = registration_tag(call, self.callee) {
            if let Some(previous) = self.tag.replace(tag) {
                debug!(
                    "multiple {}() calls, replacing '{previous}'",
                    self.callee
                );
            }
        }
        walk::walk_call_expression(self, call);
    }
}

fn registration_tag(call: &CallExpression<'_>, callee: &str) -> Option<String> {
    let Expression::Identifier(ident) = &call.callee else {
        return None;
    };
    if ident.name.as_str() != callee {
        return None;
    }
    match call.arguments.first() {
        Some(Argument::StringLiteral(literal)) => Some(literal.value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorygenError;

    #[test]
    fn finds_decorator_registration() {
        let source = r#"
            import { LitElement } from 'lit';
            import { customElement } from 'lit/decorators.js';

            @customElement('my-widget')
            export class Widget extends LitElement {}
        "#;
        assert_eq!(extract_tag(source).as_deref(), Some("my-widget"));
    }

    #[test]
    fn finds_plain_call_registration() {
        let source = "class Widget {}\ncustomElement('plain-call')(Widget);";
        assert_eq!(extract_tag(source).as_deref(), Some("plain-call"));
    }

    #[test]
    fn last_registration_wins() {
        let source = r#"
            @customElement('first-tag')
            class A {}
            @customElement('second-tag')
            class B {}
        "#;
        assert_eq!(extract_tag(source).as_deref(), Some("second-tag"));
    }

    #[test]
    fn ignores_non_literal_and_member_callees() {
        let source = r#"
            const name = 'dynamic-tag';
            @customElement(name)
            class A {}
            customElements.define('member-tag', A);
            @lit.customElement('namespaced-tag')
            class B {}
        "#;
        assert_eq!(extract_tag(source), None);
    }

    #[test]
    fn template_literal_argument_is_not_a_tag() {
        let source = "@customElement(`x-tpl`)\nclass A {}";
        assert_eq!(extract_tag(source), None);
    }

    #[test]
    fn missing_registration_yields_none() {
        assert_eq!(extract_tag("export class Plain {}"), None);
    }

    #[test]
    fn parse_failure_degrades_to_none() {
        assert_eq!(extract_tag("@customElement('x-a') class {"), None);
        let err = try_extract_tag("class {", &ExtractOptions::default())
            .err()
            .expect("parse should fail");
        assert!(matches!(err, StorygenError::Parse { .. }));
    }

    #[test]
    fn honors_custom_registration_name() {
        let options = ExtractOptions {
            registration_function: "define".to_string(),
            ..ExtractOptions::default()
        };
        let source = "@customElement('x-a') class A {}\ndefine('x-b', A);";
        assert_eq!(extract_tag_with(source, &options).as_deref(), Some("x-b"));
    }
}
