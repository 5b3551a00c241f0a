// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI settings loaded from environment variables.

use std::path::PathBuf;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Environment configuration.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// `HOUSE_LITE_LOG_FORMAT`: `json` or `pretty` (default).
    pub log_format: LogFormat,
    /// `HOUSE_LITE_OUTPUT`: default document output path; stdout when unset.
    pub output: Option<PathBuf>,
}

impl EnvConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_format: lookup("HOUSE_LITE_LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(LogFormat::Pretty),
            output: lookup("HOUSE_LITE_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = EnvConfig::from_lookup(|_| None);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.output.is_none());
    }

    #[test]
    fn reads_format_and_output() {
        let config = EnvConfig::from_lookup(|key| match key {
            "HOUSE_LITE_LOG_FORMAT" => Some("JSON".into()),
            "HOUSE_LITE_OUTPUT" => Some("/tmp/house.json".into()),
            _ => None,
        });
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.output, Some(PathBuf::from("/tmp/house.json")));
    }

    #[test]
    fn empty_output_means_stdout() {
        let config = EnvConfig::from_lookup(|key| (key == "HOUSE_LITE_OUTPUT").then(String::new));
        assert!(config.output.is_none());
    }
}
