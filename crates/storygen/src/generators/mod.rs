#[cfg(feature = "json")]
pub mod json;
pub mod story;
