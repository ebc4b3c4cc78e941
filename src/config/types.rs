use serde::Deserialize;

/// Main configuration structure for Handle-Scout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    pub platform: PlatformConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Scan behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Pause between handles (milliseconds), a courtesy to the target
    #[serde(rename = "delay-ms", default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Per-navigation timeout (milliseconds)
    #[serde(
        rename = "navigation-timeout-ms",
        default = "default_navigation_timeout_ms"
    )]
    pub navigation_timeout_ms: u64,

    /// Maximum classification attempts per handle before giving up
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Target platform configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Base address profile pages live under; the handle is appended
    #[serde(rename = "base-url")]
    pub base_url: String,
}

/// Input configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the newline-delimited handle list
    #[serde(rename = "handles-path")]
    pub handles_path: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON checkpoint file (full progress record)
    #[serde(rename = "checkpoint-path")]
    pub checkpoint_path: String,

    /// Path to the JSON file listing only the available handles
    #[serde(rename = "available-path")]
    pub available_path: String,
}

fn default_delay_ms() -> u64 {
    1_000
}

fn default_navigation_timeout_ms() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    2
}

fn default_user_agent() -> String {
    "handle-scout/0.5 (+https://github.com/handle-scout/handle-scout)".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            navigation_timeout_ms: default_navigation_timeout_ms(),
            max_retries: default_max_retries(),
            user_agent: default_user_agent(),
        }
    }
}
