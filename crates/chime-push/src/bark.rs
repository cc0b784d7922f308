use async_trait::async_trait;
use tracing::debug;

use chime_core::config::PushConfig;

use crate::error::PushError;
use crate::sender::PushSender;

/// Urgency level labels; part of the Bark wire contract.
const LEVEL_CRITICAL: &str = "critical";
const LEVEL_ACTIVE: &str = "active";

/// Where a device key points. Resolved once per key, not re-sniffed per
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarkEndpoint {
    /// A bare device token, appended to the configured hosted base URL.
    Token(String),
    /// A full base URL of a (usually self-hosted) Bark instance, device
    /// key included. Replaces the hosted base entirely.
    BaseUrl(String),
}

impl BarkEndpoint {
    /// Classify a stored device key.
    ///
    /// Keys starting with an HTTP(S) scheme are complete base URLs; a
    /// single trailing slash is dropped so path joining stays uniform.
    pub fn resolve(key: &str) -> Self {
        if key.starts_with("http://") || key.starts_with("https://") {
            let trimmed = key.strip_suffix('/').unwrap_or(key);
            BarkEndpoint::BaseUrl(trimmed.to_string())
        } else {
            BarkEndpoint::Token(key.to_string())
        }
    }

    /// Base URL for this endpoint, given the hosted default.
    fn base(&self, host: &str) -> String {
        match self {
            BarkEndpoint::Token(token) => format!("{}/{}", host.trim_end_matches('/'), token),
            BarkEndpoint::BaseUrl(url) => url.clone(),
        }
    }
}

/// HTTP push sender for Bark.
#[derive(Debug, Clone)]
pub struct BarkSender {
    client: reqwest::Client,
    config: PushConfig,
}

impl BarkSender {
    pub fn new(config: PushConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Build the full request URL for one notification.
    ///
    /// Title and body travel as path segments and must be percent-encoded;
    /// group, level and sound are query parameters.
    fn build_url(&self, key: &str, title: &str, body: &str, critical: bool) -> String {
        let endpoint = BarkEndpoint::resolve(key);
        let (level, sound) = self.urgency(critical);
        format!(
            "{}/{}/{}?group={}&level={}&sound={}",
            endpoint.base(&self.config.host),
            urlencoding::encode(title),
            urlencoding::encode(body),
            urlencoding::encode(&self.config.group),
            level,
            sound,
        )
    }

    /// Map the binary criticality to Bark's level label and alert sound.
    fn urgency(&self, critical: bool) -> (&str, &str) {
        if critical {
            (LEVEL_CRITICAL, self.config.sound.critical.as_str())
        } else {
            (LEVEL_ACTIVE, self.config.sound.normal.as_str())
        }
    }
}

#[async_trait]
impl PushSender for BarkSender {
    async fn deliver(
        &self,
        key: &str,
        title: &str,
        body: &str,
        critical: bool,
    ) -> Result<(), PushError> {
        let url = self.build_url(key, title, body, critical);
        debug!(%title, critical, "sending Bark notification");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(PushError::Api { status, message });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> BarkSender {
        BarkSender::new(PushConfig::default())
    }

    #[test]
    fn bare_token_resolves_to_token() {
        assert_eq!(
            BarkEndpoint::resolve("abc123"),
            BarkEndpoint::Token("abc123".to_string())
        );
    }

    #[test]
    fn https_key_resolves_to_base_url() {
        assert_eq!(
            BarkEndpoint::resolve("https://bark.example.com/key9"),
            BarkEndpoint::BaseUrl("https://bark.example.com/key9".to_string())
        );
    }

    #[test]
    fn trailing_slash_is_stripped_once() {
        assert_eq!(
            BarkEndpoint::resolve("https://bark.example.com/key9/"),
            BarkEndpoint::BaseUrl("https://bark.example.com/key9".to_string())
        );
    }

    #[test]
    fn token_url_uses_hosted_base() {
        let url = sender().build_url("tok1", "Title", "Body", false);
        assert!(url.starts_with("https://api.day.app/tok1/Title/Body?"));
    }

    #[test]
    fn full_url_key_replaces_hosted_base() {
        let url = sender().build_url("https://bark.example.com/key9", "Title", "Body", false);
        assert!(url.starts_with("https://bark.example.com/key9/Title/Body?"));
    }

    #[test]
    fn title_and_body_are_percent_encoded() {
        let url = sender().build_url("tok1", "Water plants", "room 2/3", false);
        assert!(url.contains("/Water%20plants/room%202%2F3?"));
    }

    #[test]
    fn critical_maps_to_elevated_level_and_sound() {
        let url = sender().build_url("tok1", "T", "B", true);
        assert!(url.contains("level=critical"));
        assert!(url.contains("sound=gotosleep"));
    }

    #[test]
    fn normal_maps_to_active_level_and_default_sound() {
        let url = sender().build_url("tok1", "T", "B", false);
        assert!(url.contains("level=active"));
        assert!(url.contains("sound=default"));
    }

    #[test]
    fn group_is_carried_as_query_parameter() {
        let url = sender().build_url("tok1", "T", "B", false);
        assert!(url.contains("group=Reminders"));
    }
}
