use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;
use std::fs;
use std::path::Path;

#[serde_inline_default]
#[derive(Debug, Deserialize, Eq, PartialEq, Clone)]
pub struct Config {
    #[serde_inline_default("0.0.0.0".to_string())]
    pub bind: String,

    #[serde_inline_default(3000_u16)]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            bind: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)?;
    let res = toml::from_str(&content)?;
    Ok(res)
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, load};

    #[test]
    fn test() {
        let config = load("test_config.toml").unwrap();

        let expected = Config {
            bind: "127.0.0.1".to_string(),
            port: 4000,
        };

        assert_eq!(expected, config);
    }

    #[test]
    fn test_defaults_for_absent_keys() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(Config::default(), config);

        let config: Config = toml::from_str("port = 8080").unwrap();
        assert_eq!("0.0.0.0", config.bind);
        assert_eq!(8080, config.port);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load("does_not_exist.toml").is_err());
    }
}
