// Completion configuration type definitions

use serde::Deserialize;

/// Default completion service endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/v1/generate/";

/// Default number of suggestions kept in the cache
pub const DEFAULT_CACHE_SIZE: usize = 10;

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Default debounce delay in milliseconds (pause in typing before a request)
fn default_debounce_ms() -> u64 {
    2000
}

fn default_cache_size() -> usize {
    DEFAULT_CACHE_SIZE
}

/// Inline completion configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionConfig {
    /// Whether inline completions are requested at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// URL of the generate endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Quiet period after the last keystroke before a request is made
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Maximum number of suggestions kept for the inline supplier
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
    /// Forwarded to the service only when set
    #[serde(default)]
    pub max_new_tokens: Option<u32>,
    /// Forwarded to the service only when set
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Request timeout; the transport default applies when unset
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            debounce_ms: default_debounce_ms(),
            cache_size: default_cache_size(),
            max_new_tokens: None,
            temperature: None,
            timeout_ms: None,
        }
    }
}
