//! Launcher configuration resolved from flags, environment, and defaults.

use std::path::PathBuf;

/// Default daemon binary path.
pub const DEFAULT_BIN: &str = "/usr/sbin/squid";
/// Default daemon configuration file.
pub const DEFAULT_CONF: &str = "/etc/squid/squid.conf";
/// Default cache directory.
pub const DEFAULT_CACHE_DIR: &str = "/var/cache/squid";

/// Environment fallback for `--bin`.
pub const ENV_BIN: &str = "SQUID_BIN";
/// Environment fallback for `--conf`.
pub const ENV_CONF: &str = "SQUID_CONF";
/// Environment fallback for `--cache`.
pub const ENV_CACHE_DIR: &str = "SQUID_CACHE_DIR";

/// Optional per-value overrides parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bin: Option<String>,
    pub conf: Option<String>,
    pub cache_dir: Option<String>,
}

/// Fully resolved launcher configuration.
///
/// Resolved once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub bin: PathBuf,
    pub conf: PathBuf,
    pub cache_dir: PathBuf,
}

/// Resolve configuration with precedence: flag > environment > default.
///
/// An empty string at any level falls through to the next source, so
/// `SQUID_BIN=""` behaves like an unset variable. `env` is the only
/// environment access in the program; `main` passes
/// `|name| std::env::var(name).ok()`.
pub fn resolve<F>(overrides: &Overrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    ResolvedConfig {
        bin: pick(&overrides.bin, env(ENV_BIN), DEFAULT_BIN),
        conf: pick(&overrides.conf, env(ENV_CONF), DEFAULT_CONF),
        cache_dir: pick(&overrides.cache_dir, env(ENV_CACHE_DIR), DEFAULT_CACHE_DIR),
    }
}

fn pick(flag: &Option<String>, env_value: Option<String>, default: &str) -> PathBuf {
    flag.clone()
        .filter(|s| !s.is_empty())
        .or_else(|| env_value.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| default.to_string())
        .into()
}
