use serde::Serialize;

use crate::{
    error::{Result, StorygenError},
    model::ComponentDescriptor,
};

/// Pretty-printed JSON representation of an analyzed component.
pub fn render_json(component: &ComponentDescriptor) -> Result<String> {
    let payload = JsonPayload {
        version: env!("CARGO_PKG_VERSION"),
        component,
    };

    serde_json::to_string_pretty(&payload).map_err(|error| StorygenError::Other {
        message: error.to_string(),
    })
}

#[derive(Serialize)]
struct JsonPayload<'a> {
    version: &'static str,
    component: &'a ComponentDescriptor,
}
