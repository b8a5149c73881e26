use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Ordered property set; iteration order is declaration order in the source.
pub type PropertyMap = IndexMap<String, PropertyDescriptor>;

/// Everything known about one component source, assembled per file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// File base name without extension and source marker.
    pub component_name: String,
    /// Tag passed to the registration call.
    pub tag_name: String,
    /// Reactive fields in declaration order.
    pub properties: PropertyMap,
}

impl ComponentDescriptor {
    pub fn new(
        component_name: impl Into<String>,
        tag_name: impl Into<String>,
        properties: PropertyMap,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            tag_name: tag_name.into(),
            properties,
        }
    }
}

/// One reactive field discovered on a component class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Field identifier.
    pub name: String,
    /// Type inferred from the field's annotation.
    pub semantic_type: SemanticType,
    /// Literal initializer, if the field has one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<LiteralValue>,
}

impl PropertyDescriptor {
    /// Creates a descriptor without a default value.
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            default_value: None,
        }
    }

    /// Attaches a literal default value.
    pub fn with_default(mut self, value: LiteralValue) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// Closed set of types used in place of full type information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Unknown,
}

impl SemanticType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Unknown => "unknown",
        }
    }

    /// Storybook control kind for this type. Every type has one.
    pub fn control_kind(self) -> ControlKind {
        match self {
            Self::String | Self::Unknown => ControlKind::Text,
            Self::Number => ControlKind::Number,
            Self::Boolean => ControlKind::Boolean,
            Self::Array | Self::Object => ControlKind::Object,
        }
    }
}

impl Default for SemanticType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI editor widget category shown in the Storybook controls panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Text,
    Number,
    Boolean,
    Object,
}

impl ControlKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal initializer copied verbatim from a field declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl LiteralValue {
    /// JSON value for this literal. Whole numbers stay integral so `0`
    /// renders as `0` rather than `0.0`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::String(value) => serde_json::Value::String(value.clone()),
            Self::Boolean(value) => serde_json::Value::Bool(*value),
            Self::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
                    serde_json::Value::from(*value as i64)
                } else {
                    serde_json::Number::from_f64(*value)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
        }
    }

    /// JSON-compatible source text for this literal.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl Serialize for LiteralValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
