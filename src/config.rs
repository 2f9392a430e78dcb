//! Runtime configuration and build metadata.
//!
//! Values come from the environment (a `.env` file is loaded by `main`),
//! command-line flags override them.

use crate::output::RenderMode;
use std::env;
use std::str::FromStr;

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(format!("unknown color choice: {other}")),
        }
    }
}

impl ColorChoice {
    /// Set the process-wide `colored` override.
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => colored::control::unset_override(),
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: RenderMode,
    pub color: ColorChoice,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: RenderMode::default(),
            color: ColorChoice::default(),
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

fn parse_or_default<T: FromStr<Err = String> + Default>(key: &str, value: Option<String>) -> T {
    match value.map(|v| v.parse::<T>()) {
        Some(Ok(parsed)) => parsed,
        Some(Err(e)) => {
            log::warn!("Ignoring {key}: {e}");
            T::default()
        }
        None => T::default(),
    }
}

impl Config {
    /// Read `NETCALC_MODE`, `NETCALC_COLOR`, `NO_COLOR` and `NETCALC_LOG_CONFIG`.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unknown values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let color = if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            ColorChoice::Never
        } else {
            parse_or_default("NETCALC_COLOR", lookup("NETCALC_COLOR"))
        };
        Config {
            mode: parse_or_default("NETCALC_MODE", lookup("NETCALC_MODE")),
            color,
            log_config: lookup("NETCALC_LOG_CONFIG")
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string()),
        }
    }
}

/// Version information injected at build time.
///
/// ```sh
/// NETCALC_BUILD_TIME=$(date -u +%Y-%m-%dT%H:%M:%SZ) \
/// NETCALC_GIT_COMMIT=$(git rev-parse --short HEAD) \
/// NETCALC_GIT_BRANCH=$(git rev-parse --abbrev-ref HEAD) cargo build --release
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: &'static str,
    pub git_commit: &'static str,
    pub git_branch: &'static str,
}

const UNKNOWN: &str = "unknown";

pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    build_time: match option_env!("NETCALC_BUILD_TIME") {
        Some(v) => v,
        None => UNKNOWN,
    },
    git_commit: match option_env!("NETCALC_GIT_COMMIT") {
        Some(v) => v,
        None => UNKNOWN,
    },
    git_branch: match option_env!("NETCALC_GIT_BRANCH") {
        Some(v) => v,
        None => UNKNOWN,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        assert_eq!(Config::from_lookup(lookup_from(&[])), Config::default());
    }

    #[test]
    fn test_config_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("NETCALC_MODE", "binary"),
            ("NETCALC_COLOR", "always"),
            ("NETCALC_LOG_CONFIG", "/etc/netcalc/log4rs.yml"),
        ]));
        assert_eq!(config.mode, RenderMode::Binary);
        assert_eq!(config.color, ColorChoice::Always);
        assert_eq!(config.log_config, "/etc/netcalc/log4rs.yml");
    }

    #[test]
    fn test_config_no_color_wins() {
        let config = Config::from_lookup(lookup_from(&[
            ("NETCALC_COLOR", "always"),
            ("NO_COLOR", "1"),
        ]));
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_config_bad_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("NETCALC_MODE", "fancy"),
            ("NETCALC_COLOR", "sometimes"),
        ]));
        assert_eq!(config.mode, RenderMode::Detailed);
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_build_info_version() {
        assert_eq!(BUILD_INFO.version, env!("CARGO_PKG_VERSION"));
        assert!(!BUILD_INFO.git_commit.is_empty());
    }
}
