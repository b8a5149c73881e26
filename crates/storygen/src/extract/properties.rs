use oxc_allocator::Allocator;
use oxc_ast::ast::{
    AccessorProperty, Decorator, Expression, PropertyDefinition, PropertyKey, TSType,
    TSTypeAnnotation, TSTypeName, TSTypeReference,
};
use oxc_ast_visit::{Visit, walk};
use tracing::{trace, warn};

use super::{ExtractOptions, ReactiveMarkers};
use crate::error::Result;
use crate::model::{LiteralValue, PropertyDescriptor, PropertyMap, SemanticType};
use crate::parser::{ParseOptions, parse};

/// Collect reactive fields using default options.
pub fn extract_properties(source: &str) -> PropertyMap {
    extract_properties_with(source, &ExtractOptions::default())
}

/// Collect reactive fields. Parse failures are logged and yield an empty map.
pub fn extract_properties_with(source: &str, options: &ExtractOptions) -> PropertyMap {
    match try_extract_properties(source, options) {
        Ok(properties) => properties,
        Err(error) => {
            warn!("property extraction skipped: {error}");
            PropertyMap::default()
        }
    }
}

/// Collect reactive fields, surfacing parse errors.
pub fn try_extract_properties(source: &str, options: &ExtractOptions) -> Result<PropertyMap> {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, source, ParseOptions::typescript())?;

    let mut visitor = ReactiveFieldVisitor {
        markers: &options.markers,
        properties: PropertyMap::default(),
    };
    visitor.visit_program(parsed.ast());
    Ok(visitor.properties)
}

struct ReactiveFieldVisitor<'o> {
    markers: &'o ReactiveMarkers,
    properties: PropertyMap,
}

impl ReactiveFieldVisitor<'_> {
    fn record(
        &mut self,
        decorators: &[Decorator<'_>],
        key: &PropertyKey<'_>,
        annotation: Option<&TSTypeAnnotation<'_>>,
        initializer: Option<&Expression<'_>>,
    ) {
        if !self.markers.is_reactive(decorators) {
            return;
        }
        // Computed, string, numeric and private keys carry no identifier name.
        let PropertyKey::StaticIdentifier(ident) = key else {
            return;
        };

        let name = ident.name.to_string();
        let descriptor = PropertyDescriptor {
            name: name.clone(),
            semantic_type: infer_semantic_type(annotation),
            default_value: initializer.and_then(literal_default),
        };
        trace!("reactive field {name}: {}", descriptor.semantic_type);
        // A redeclared name keeps its first position and takes the new value.
        self.properties.insert(name, descriptor);
    }
}

impl<'o, 'ast> Visit<'ast> for ReactiveFieldVisitor<'o> {
    fn visit_property_definition(&mut self, field: &PropertyDefinition<'ast>) {
        self.record(
            &field.decorators,
            &field.key,
            field.type_annotation.as_deref(),
            field.value.as_ref(),
        );
        walk::walk_property_definition(self, field);
    }

    fn visit_accessor_property(&mut self, field: &AccessorProperty<'ast>) {
        self.record(
            &field.decorators,
            &field.key,
            field.type_annotation.as_deref(),
            field.value.as_ref(),
        );
        walk::walk_accessor_property(self, field);
    }
}

/// Map a field's type annotation onto the semantic type enumeration.
pub(crate) fn infer_semantic_type(annotation: Option<&TSTypeAnnotation<'_>>) -> SemanticType {
    let Some(annotation) = annotation else {
        return SemanticType::Unknown;
    };
    match &annotation.type_annotation {
        TSType::TSStringKeyword(_) => SemanticType::String,
        TSType::TSNumberKeyword(_) => SemanticType::Number,
        TSType::TSBooleanKeyword(_) => SemanticType::Boolean,
        TSType::TSArrayType(_) => SemanticType::Array,
        TSType::TSTypeReference(reference) if is_array_reference(reference) => {
            SemanticType::Array
        }
        TSType::TSObjectKeyword(_) => SemanticType::Object,
        _ => SemanticType::Unknown,
    }
}

fn is_array_reference(reference: &TSTypeReference<'_>) -> bool {
    matches!(
        &reference.type_name,
        TSTypeName::IdentifierReference(ident) if ident.name.as_str() == "Array"
    )
}

/// Only plain string, numeric and boolean literals count as defaults.
pub(crate) fn literal_default(initializer: &Expression<'_>) -> Option<LiteralValue> {
    match initializer {
        Expression::StringLiteral(literal) => {
            Some(LiteralValue::String(literal.value.to_string()))
        }
        Expression::NumericLiteral(literal) => Some(LiteralValue::Number(literal.value)),
        Expression::BooleanLiteral(literal) => Some(LiteralValue::Boolean(literal.value)),
        _ => None,
    }
}
