//! Error types.
//!
//! Nothing on the page is fatal. A missing element is not an error at all (the
//! element cache holds `None` and the feature stays inert); these types cover
//! the remaining cases: an unusable config override, and a browser call that
//! threw. Bootstrap logs either kind and moves on to the next feature.

/// Error returned by [`crate::config::Config::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override was not valid JSON or named an unknown field.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric field holds a value the page cannot use.
    #[error("site config field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    /// `logLevel` is not one of `error`, `warn`, `info`, `debug`, `trace`.
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// Error raised while binding behavior to the document.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A browser API call threw.
    #[error("{op} failed: {detail}")]
    Dom { op: &'static str, detail: String },
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PageError {
    /// Wrap a thrown browser value, keeping its debug rendering.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn dom(op: &'static str, thrown: wasm_bindgen::JsValue) -> Self {
        Self::Dom { op, detail: format!("{thrown:?}") }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
