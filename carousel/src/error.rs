//! Error types for the carousel crate.
//!
//! Interaction itself never fails: missing containers, empty item sets and
//! zero-width measurements are no-ops. Errors only surface at the edges where
//! the host hands the engine something it cannot use (bad configuration) or
//! where a DOM call is rejected.

/// Error returned when a [`crate::config::CarouselConfig`] cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON payload could not be deserialized.
    #[error("invalid carousel config JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A numeric option is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    /// A numeric option is outside its accepted range.
    #[error("`{field}` must be within {range}, got {value}")]
    OutOfRange { field: &'static str, range: &'static str, value: f64 },
}

/// Error returned by the DOM-bound engine surface.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A DOM call failed; the payload is the stringified `JsValue`.
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for CarouselError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
