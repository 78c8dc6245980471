//! Runtime configuration loaded from the process environment.
//!
//! Only logging is configurable. Operation semantics never depend on these values.

use std::env;

/// Output shape for log lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Snapshot of configuration values consumed by the boundary layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BridgeCfg {
    /// `EnvFilter` directive string, e.g. `"warn"` or `"cbridge=debug"`.
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for BridgeCfg {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl BridgeCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_filter = lookup("CBRIDGE_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let log_format = lookup("CBRIDGE_LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(defaults.log_format);

        Self {
            log_filter,
            log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cfg_from(pairs: &[(&str, &str)]) -> BridgeCfg {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BridgeCfg::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(cfg_from(&[]), BridgeCfg::default());
    }

    #[test]
    fn reads_filter_and_format() {
        let cfg = cfg_from(&[("CBRIDGE_LOG", "cbridge=debug"), ("CBRIDGE_LOG_FORMAT", "JSON")]);
        assert_eq!(cfg.log_filter, "cbridge=debug");
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn blank_filter_and_unknown_format_fall_back() {
        let cfg = cfg_from(&[("CBRIDGE_LOG", "  "), ("CBRIDGE_LOG_FORMAT", "yaml")]);
        assert_eq!(cfg.log_filter, "warn");
        assert_eq!(cfg.log_format, LogFormat::Text);
    }
}
