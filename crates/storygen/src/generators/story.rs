//! Storybook story rendering.

use std::fmt::Write;

use crate::model::{ComponentDescriptor, PropertyDescriptor, PropertyMap};

/// Fixed pieces of the generated story module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Suffix appended to the component name to import its module (`.ce`).
    pub source_marker: String,
    /// First segment of the story title.
    pub title_prefix: String,
    /// Documentation tag placed in `tags`.
    pub docs_tag: String,
    /// Module providing the `Meta`/`StoryObj` types.
    pub framework: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            source_marker: ".ce".to_string(),
            title_prefix: "Components".to_string(),
            docs_tag: "autodocs".to_string(),
            framework: "@storybook/web-components".to_string(),
        }
    }
}

/// Render the story module for a single component.
///
/// Output is deterministic for identical inputs. Names coming from the file
/// system and the tag literal are escaped into single-quoted strings; property
/// names are identifiers and are written as-is.
pub fn render(
    component_name: &str,
    tag_name: &str,
    properties: &PropertyMap,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "import type {{ Meta, StoryObj }} from {};",
        quote(&options.framework)
    );
    let _ = writeln!(
        out,
        "import {};",
        quote(&format!("./{component_name}{}", options.source_marker))
    );
    out.push('\n');

    let _ = writeln!(out, "const meta: Meta = {{");
    let _ = writeln!(
        out,
        "  title: {},",
        quote(&display_title(&options.title_prefix, component_name))
    );
    let _ = writeln!(out, "  component: {},", quote(tag_name));
    let _ = writeln!(out, "  tags: [{}],", quote(&options.docs_tag));

    if properties.is_empty() {
        let _ = writeln!(out, "  argTypes: {{}},");
    } else {
        let _ = writeln!(out, "  argTypes: {{");
        for property in properties.values() {
            render_arg_type(&mut out, property);
        }
        let _ = writeln!(out, "  }},");
    }
    let _ = writeln!(out, "}};");
    out.push('\n');

    let _ = writeln!(out, "export default meta;");
    let _ = writeln!(out, "type Story = StoryObj;");
    out.push('\n');

    let _ = writeln!(out, "export const Default: Story = {{");
    let mut defaults = properties
        .values()
        .filter_map(|property| Some((&property.name, property.default_value.as_ref()?)))
        .peekable();
    if defaults.peek().is_none() {
        let _ = writeln!(out, "  args: {{}},");
    } else {
        let _ = writeln!(out, "  args: {{");
        for (name, value) in defaults {
            let _ = writeln!(out, "    {name}: {},", value.to_json_string());
        }
        let _ = writeln!(out, "  }},");
    }
    let _ = writeln!(out, "}};");

    out
}

/// Render a [`ComponentDescriptor`] with the given options.
pub fn render_component(component: &ComponentDescriptor, options: &RenderOptions) -> String {
    render(
        &component.component_name,
        &component.tag_name,
        &component.properties,
        options,
    )
}

fn render_arg_type(buffer: &mut String, property: &PropertyDescriptor) {
    let ty = property.semantic_type;
    let _ = writeln!(buffer, "    {}: {{", property.name);
    let _ = writeln!(buffer, "      control: '{}',", ty.control_kind());
    let _ = writeln!(buffer, "      description: '{} property',", property.name);
    let _ = writeln!(buffer, "      table: {{");
    let _ = writeln!(buffer, "        type: {{ summary: '{ty}' }},");
    if let Some(value) = &property.default_value {
        let _ = writeln!(
            buffer,
            "        defaultValue: {{ summary: {} }},",
            quote(&value.to_json_string())
        );
    }
    let _ = writeln!(buffer, "      }},");
    let _ = writeln!(buffer, "    }},");
}

/// `Components/MyWidget` for `my-widget`.
pub fn display_title(prefix: &str, component_name: &str) -> String {
    let name: String = component_name
        .split(['-', '_', '.', ' '])
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect();
    if prefix.is_empty() {
        name
    } else {
        format!("{prefix}/{name}")
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Single-quoted TypeScript string literal.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\u{2028}' => quoted.push_str("\\u2028"),
            '\u{2029}' => quoted.push_str("\\u2029"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}
