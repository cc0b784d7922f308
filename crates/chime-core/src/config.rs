use chrono::Duration;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 18790;
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Hosted Bark instance used when a device key is a bare token.
pub const DEFAULT_PUSH_HOST: &str = "https://api.day.app";
/// Dispatch window lookahead floor, in minutes.
pub const MIN_LOOKAHEAD_MIN: u64 = 1;

/// Top-level config (chime.toml + CHIME_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChimeConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Store location and credentials. Required; there is no default.
    pub store: StoreConfig,
    #[serde(default)]
    pub push: PushConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Supabase project coordinates. The key must be a service-role key since
/// the dispatch cycle writes back to the `reminders` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Service-role API key.
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Notification group label shown by the Bark client.
    #[serde(default = "default_group")]
    pub group: String,
    /// Base URL for bare-token device keys. Full-URL keys override this.
    #[serde(default = "default_push_host")]
    pub host: String,
    #[serde(default)]
    pub sound: SoundConfig,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            group: default_group(),
            host: default_push_host(),
            sound: SoundConfig::default(),
        }
    }
}

/// Alert sound selectors sent alongside the urgency level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_critical_sound")]
    pub critical: String,
    #[serde(default = "default_normal_sound")]
    pub normal: String,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            critical: default_critical_sound(),
            normal: default_normal_sound(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Dispatch window half-width in minutes. Floored at 1.
    #[serde(default = "default_lookahead")]
    pub lookahead: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            lookahead: default_lookahead(),
        }
    }
}

impl DispatchConfig {
    /// Symmetric dispatch window around "now". A reminder fires iff its due
    /// instant is within this duration of the current instant, inclusive.
    pub fn window(&self) -> Duration {
        Duration::minutes(self.lookahead.max(MIN_LOOKAHEAD_MIN) as i64)
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_group() -> String {
    "Reminders".to_string()
}
fn default_push_host() -> String {
    DEFAULT_PUSH_HOST.to_string()
}
fn default_critical_sound() -> String {
    "gotosleep".to_string()
}
fn default_normal_sound() -> String {
    "default".to_string()
}
fn default_lookahead() -> u64 {
    MIN_LOOKAHEAD_MIN
}

impl ChimeConfig {
    /// Load config from a TOML file with CHIME_* env var overrides.
    ///
    /// Missing store coordinates fail here, before any network activity
    /// is attempted.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: ChimeConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("CHIME_").split("_"))
            .extract()
            .map_err(|e| crate::error::ChimeError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.chime/chime.toml", home)
}
