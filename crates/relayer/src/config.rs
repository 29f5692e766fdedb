//! Relayer configuration: the chains a relay path connects, the channel end
//! used on each of them and the key which signs messages submitted there.

pub mod error;

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use ibc_packet_relay_types::core::ics24_host::identifier::{ChainId, ChannelId, PortId};

use crate::chain::path_end::PathEnd;

pub use error::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub chains: Vec<ChainConfig>,
}

impl Config {
    pub fn has_chain(&self, id: &ChainId) -> bool {
        self.chains.iter().any(|c| c.id == *id)
    }

    pub fn find_chain(&self, id: &ChainId) -> Option<&ChainConfig> {
        self.chains.iter().find(|c| c.id == *id)
    }

    /// Method for syntactic validation of the input configuration file.
    pub fn validate_config(&self) -> Result<(), Error> {
        let mut unique_chain_ids = HashSet::new();
        for chain_config in self.chains.iter() {
            if !unique_chain_ids.insert(chain_config.id.clone()) {
                return Err(Error::duplicate_chains(chain_config.id.clone()));
            }
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    pub id: ChainId,
    pub key_name: String,
    pub port_id: PortId,
    pub channel_id: ChannelId,
}

impl ChainConfig {
    /// The channel end which packets relayed on this chain go through.
    pub fn path_end(&self) -> PathEnd {
        PathEnd::new(self.port_id.clone(), self.channel_id.clone())
    }
}

/// Attempt to load and parse the TOML config file as a `Config`.
pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
    let path = path.as_ref();
    let config_toml = fs::read_to_string(path).map_err(|e| Error::io(path.to_path_buf(), e))?;

    let config = toml::from_str::<Config>(&config_toml)
        .map_err(|e| Error::decode(path.to_path_buf(), e))?;
    config.validate_config()?;

    debug!(
        path = %path.display(),
        chains = config.chains.len(),
        "loaded configuration"
    );

    Ok(config)
}

/// Serialize the given `Config` as TOML to the given config file.
pub fn store(config: &Config, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| Error::io(path.to_path_buf(), e))?;

    store_writer(config, &mut file)
}

/// Serialize the given `Config` as TOML to the given writer.
pub(crate) fn store_writer(config: &Config, mut writer: impl Write) -> Result<(), Error> {
    let toml_config = toml::to_string_pretty(&config).map_err(Error::encode)?;

    writeln!(writer, "{toml_config}").map_err(Error::write)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use ibc_packet_relay_types::core::ics24_host::identifier::{ChainId, ChannelId, PortId};

    use super::{load, store, store_writer, Config};
    use crate::config::error::ErrorDetail;

    const TWO_CHAINS: &str = r#"
[[chains]]
id = "ibc-0"
key_name = "testkey"
port_id = "transfer"
channel_id = "channel-0"

[[chains]]
id = "ibc-1"
key_name = "testkey"
port_id = "transfer"
channel_id = "channel-1"
"#;

    #[test]
    fn parse_and_find_chains() {
        let config: Config = toml::from_str(TWO_CHAINS).unwrap();
        config.validate_config().unwrap();

        let ibc_1 = config.find_chain(&ChainId::from_string("ibc-1")).unwrap();
        assert_eq!(ibc_1.key_name, "testkey");
        assert_eq!(ibc_1.path_end().port_id, PortId::transfer());
        assert_eq!(ibc_1.path_end().channel_id, ChannelId::new(1));

        assert!(!config.has_chain(&ChainId::from_string("ibc-2")));
    }

    #[test]
    fn invalid_channel_id_is_rejected() {
        let invalid = TWO_CHAINS.replace("channel-1", "ch");
        assert!(toml::from_str::<Config>(&invalid).is_err());
    }

    #[test]
    fn duplicate_chains_are_rejected() {
        let duplicated = TWO_CHAINS.replace("ibc-1", "ibc-0");
        let config: Config = toml::from_str(&duplicated).unwrap();

        let err = config.validate_config().unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::DuplicateChains(_)));
    }

    #[test]
    fn store_then_load() {
        let config: Config = toml::from_str(TWO_CHAINS).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        store(&config, &path).unwrap();
        assert_eq!(load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load(&path).unwrap_err();
        match err.detail() {
            ErrorDetail::Io(e) => assert_eq!(e.path, path),
            _ => panic!("expected an I/O error, got {err}"),
        }
    }

    #[test]
    fn serialize_default_config() {
        let mut buffer = Vec::new();
        store_writer(&Config::default(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "");
    }
}
