use crate::Result;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub pretty: bool,

    #[serde(default)]
    pub json_log: bool,
}

impl Config {
    pub const PREFIX: &'static str = "INSPECT_";

    pub fn from_env() -> Result<Self> {
        envy::prefixed(Self::PREFIX).from_env().map_err(Into::into)
    }

    pub fn from_vars<I: IntoIterator<Item = (String, String)>>(vars: I) -> Result<Self> {
        envy::prefixed(Self::PREFIX)
            .from_iter(vars)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[("RUST_LOG", "debug")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_prefixed() {
        let config =
            Config::from_vars(vars(&[("INSPECT_PRETTY", "true"), ("INSPECT_JSON_LOG", "false")]))
                .unwrap();

        assert!(config.pretty);
        assert!(!config.json_log);
    }

    #[test]
    fn test_bad_bool() {
        assert!(Config::from_vars(vars(&[("INSPECT_PRETTY", "maybe")])).is_err());
    }
}
