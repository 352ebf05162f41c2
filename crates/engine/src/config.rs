//! Engine configuration.
//!
//! Grid size is fixed at compile time; timing and startup behavior can be
//! overridden from the environment.

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::types::FPS;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("fps must be greater than zero")]
    ZeroFps,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Target frames per second.
    pub fps: u32,
    /// Show the logo before the first frame.
    pub splash: bool,
    /// How long the logo stays up, in milliseconds.
    pub splash_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            splash: true,
            splash_ms: 2000,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `FOG2D_FPS`, `FOG2D_SPLASH` and `FOG2D_SPLASH_MS`.
    ///
    /// Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`EngineConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(fps) = parse_var::<u32>(&lookup, "FOG2D_FPS") {
            config.fps = fps;
        }
        if let Some(splash) = lookup("FOG2D_SPLASH").as_deref().and_then(parse_bool) {
            config.splash = splash;
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "FOG2D_SPLASH_MS") {
            config.splash_ms = ms;
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }

    /// `1 / fps` seconds.
    pub fn frame_period(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps.max(1)))
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.fps, 30);
        assert!(config.splash);
        assert_eq!(config.splash_duration(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn frame_period_is_reciprocal_of_fps() {
        let config = EngineConfig {
            fps: 50,
            ..EngineConfig::default()
        };
        assert_eq!(config.frame_period(), Duration::from_millis(20));
    }

    #[test]
    fn zero_fps_is_rejected() {
        let config = EngineConfig {
            fps: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFps));
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn unset_variables_keep_defaults() {
        assert_eq!(
            EngineConfig::from_lookup(lookup_from(&[])),
            EngineConfig::default()
        );
    }

    #[test]
    fn valid_variables_override_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("FOG2D_FPS", "60"),
            ("FOG2D_SPLASH", "off"),
            ("FOG2D_SPLASH_MS", "250"),
        ]));
        assert_eq!(
            config,
            EngineConfig {
                fps: 60,
                splash: false,
                splash_ms: 250,
            }
        );
    }

    #[test]
    fn unparseable_variables_are_ignored() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("FOG2D_FPS", "fast"),
            ("FOG2D_SPLASH", "nope"),
            ("FOG2D_SPLASH_MS", "-5"),
        ]));
        assert_eq!(config, EngineConfig::default());

        let config = EngineConfig::from_lookup(lookup_from(&[
            ("FOG2D_FPS", "60"),
            ("FOG2D_SPLASH_MS", "soon"),
        ]));
        assert_eq!(config.fps, 60);
        assert_eq!(config.splash_ms, 2000);
    }

    #[test]
    fn zero_fps_from_env_is_caught_by_validate() {
        let config = EngineConfig::from_lookup(lookup_from(&[("FOG2D_FPS", "0")]));
        assert_eq!(config.validate(), Err(ConfigError::ZeroFps));
    }

    #[test]
    fn bool_parsing() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool(" Off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
