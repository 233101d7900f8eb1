//! Walk configuration.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};

use crate::cancel::CancelToken;
use crate::error::ConfigError;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration for a walk.
///
/// The default configuration waits forever on open streams, never cancels and
/// has no depth limit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Maximum time to wait for each stream item.
    /// Default: None (wait until the stream closes)
    #[serde(
        default,
        rename = "stream_timeout_ms",
        with = "millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub stream_timeout: Option<Duration>,

    /// Values nested deeper than this are skipped.
    /// Default: None (no limit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Token that interrupts the walk when cancelled. Runtime only.
    #[serde(skip)]
    pub cancel: Option<CancelToken>,
}

impl WalkConfig {
    /// Creates a new `WalkConfig` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum wait for each stream item.
    pub fn stream_timeout(mut self, timeout: Duration) -> Self {
        self.stream_timeout = Some(timeout);
        self
    }

    /// Sets the maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Attaches a cancellation token.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Loads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        // Parse into Value first for validation
        let value: serde_json::Value = serde_json::from_str(json)?;

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            return Err(ConfigError::validation(format!(
                "{} at {}",
                e,
                e.instance_path()
            )));
        }

        Ok(serde_json::from_value(value)?)
    }
}

/// `Option<Duration>` as whole milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(duration) => {
                let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
                serializer.serialize_some(&millis)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}
