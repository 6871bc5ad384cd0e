//! Server configuration from environment variables

use std::time::Duration;

use anyhow::{Context, bail};
use auth::{AuthConfig, GoogleConfig};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15 * 60);
const MAX_SESSION_TTL: Duration = Duration::from_secs(365 * 24 * 3600);
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(24 * 3600);

/// Process settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub google: GoogleConfig,
    /// `None` only in debug builds; a random key is used then
    pub session_secret: Option<String>,
    pub session_ttl: Option<Duration>,
    pub cookie_secure: bool,
    /// Selects the PostgreSQL store when set
    pub database_url: Option<String>,
    pub sweep_interval: Duration,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let require = |key: &str| {
            get(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{key} must be set in environment"))
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse().with_context(|| format!("Invalid PORT: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let google = GoogleConfig {
            client_id: require("GOOGLE_CLIENT_ID")?,
            client_secret: require("GOOGLE_CLIENT_SECRET")?,
            callback_url: get("GOOGLE_CALLBACK_URL")
                .unwrap_or_else(|| format!("http://localhost:{port}/auth/google/callback")),
        };

        let session_secret = get("SESSION_SECRET").filter(|v| !v.is_empty());
        if session_secret.is_none() && !cfg!(debug_assertions) {
            bail!("SESSION_SECRET must be set in production");
        }

        let session_ttl = get("SESSION_TTL_SECS")
            .map(|raw| parse_secs("SESSION_TTL_SECS", &raw, MAX_SESSION_TTL))
            .transpose()?;

        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).with_context(|| format!("Invalid COOKIE_SECURE: {raw}"))?,
            None => !cfg!(debug_assertions),
        };

        let sweep_interval = get("SESSION_SWEEP_SECS")
            .map(|raw| parse_secs("SESSION_SWEEP_SECS", &raw, MAX_SWEEP_INTERVAL))
            .transpose()?
            .unwrap_or(DEFAULT_SWEEP_INTERVAL);

        Ok(Self {
            port,
            google,
            session_secret,
            session_ttl,
            cookie_secure,
            database_url: get("DATABASE_URL").filter(|v| !v.is_empty()),
            sweep_interval,
        })
    }

    /// Auth settings for the router
    pub fn auth_config(&self) -> AuthConfig {
        let base = match &self.session_secret {
            Some(secret) => AuthConfig::from_secret(secret),
            // Only reachable in debug builds
            None => {
                tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
                AuthConfig::development()
            }
        };

        AuthConfig {
            cookie_secure: self.cookie_secure,
            session_ttl: self.session_ttl.unwrap_or(base.session_ttl),
            ..base
        }
    }
}

/// Whole seconds in `1..=max`
fn parse_secs(key: &str, raw: &str, max: Duration) -> anyhow::Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Invalid {key}: {raw}"))?;

    let value = Duration::from_secs(secs);
    if secs == 0 || value > max {
        bail!("Invalid {key}: {raw} (must be between 1 and {})", max.as_secs());
    }

    Ok(value)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const BASE: [(&str, &str); 3] = [
        ("GOOGLE_CLIENT_ID", "id"),
        ("GOOGLE_CLIENT_SECRET", "secret"),
        ("SESSION_SECRET", "s3cret"),
    ];

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&BASE)).unwrap();

        assert_eq!(settings.port, 3000);
        assert_eq!(
            settings.google.callback_url,
            "http://localhost:3000/auth/google/callback"
        );
        assert!(settings.database_url.is_none());
        assert_eq!(settings.sweep_interval, DEFAULT_SWEEP_INTERVAL);
    }

    #[test]
    fn test_overrides() {
        let mut pairs = BASE.to_vec();
        pairs.extend([
            ("PORT", "8080"),
            ("SESSION_TTL_SECS", "600"),
            ("COOKIE_SECURE", "false"),
            ("DATABASE_URL", "postgres://localhost/app"),
        ]);
        let settings = Settings::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(
            settings.google.callback_url,
            "http://localhost:8080/auth/google/callback"
        );
        assert_eq!(settings.database_url.as_deref(), Some("postgres://localhost/app"));

        let config = settings.auth_config();
        assert_eq!(config.session_ttl, Duration::from_secs(600));
        assert!(!config.cookie_secure);
        assert_eq!(config.session_secret, AuthConfig::from_secret("s3cret").session_secret);
    }

    #[test]
    fn test_missing_client_id() {
        let err = Settings::from_lookup(lookup(&BASE[1..])).unwrap_err();
        assert!(err.to_string().contains("GOOGLE_CLIENT_ID"));
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            ("PORT", "http"),
            ("SESSION_TTL_SECS", "-1"),
            ("SESSION_TTL_SECS", "0"),
            ("SESSION_TTL_SECS", "10000000000000"),
            ("SESSION_SWEEP_SECS", "0"),
            ("SESSION_SWEEP_SECS", "86401"),
            ("COOKIE_SECURE", "maybe"),
        ] {
            let mut pairs = BASE.to_vec();
            pairs.push((key, value));
            let err = Settings::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(err.to_string().contains(key), "{key}");
        }
    }

    #[test]
    fn test_range_limits_accepted() {
        let mut pairs = BASE.to_vec();
        pairs.extend([("SESSION_TTL_SECS", "31536000"), ("SESSION_SWEEP_SECS", "1")]);
        let settings = Settings::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(settings.session_ttl, Some(MAX_SESSION_TTL));
        assert_eq!(settings.sweep_interval, Duration::from_secs(1));
    }
}
