use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// App configuration. Everything is optional: a missing config file just
/// means defaults, so classification commands work before `init` is run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// User whose history is read/written when `--user` is not given.
    #[serde(default)]
    pub default_user: Option<String>,

    /// Directory holding the per-user JSON documents
    /// (default: ~/.config/fittrack/users/).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config_parses() {
        let yaml = r#"
default_user: alex
data_dir: /tmp/fittrack-users
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.default_user.as_deref(), Some("alex"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/fittrack-users")));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = Config {
            default_user: Some("alex".to_string()),
            data_dir: Some(PathBuf::from("/tmp/users")),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
