use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use storage_unit::{Bits, Bytes};

pub use crate::error::Error;

mod error;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LinkConfig {
    pub addr: String,

    /// Sustained rate, e.g. `"10Gb"`.
    pub bandwidth: Bits,
    /// Extra allowance above `bandwidth` for short spikes.
    #[serde(default)]
    pub burst: Bits,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PoolConfig {
    pub block_size: Bytes,
    pub capacity: usize,
}

impl PoolConfig {
    /// Total memory the pool may hold.
    pub fn size(&self) -> Bytes {
        self.block_size * self.capacity as u64
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StoreConfig {
    pub dir: String,
    pub shards: usize,

    pub meta_size: Bytes,
    pub node_size: Bytes,
    pub max_disk_usage: Bytes,

    pub pool: PoolConfig,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NodeConfig {
    pub link: LinkConfig,

    pub stores: Vec<StoreConfig>,

    pub incoming_pool: PoolConfig,
    pub outgoing_pool: PoolConfig,
}

pub fn from_str<T>(contents: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    Ok(toml::from_str(contents)?)
}

pub fn from_file<T>(path: impl AsRef<Path>) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    debug!("reading config from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    from_str(&contents)
}

#[cfg(test)]
pub mod test {
    use std::io::Write;

    use matches::assert_matches;
    use storage_unit::{Bits, Bytes};

    use super::{from_file, from_str, Error, LinkConfig, NodeConfig, PoolConfig, StoreConfig};

    fn example() -> NodeConfig {
        NodeConfig {
            link: LinkConfig {
                addr: "localhost:10001".to_string(),
                bandwidth: Bits::GIGABIT * 10,
                burst: Bits::new(1_500_000),
            },
            stores: vec![
                StoreConfig {
                    dir: "./lich/".to_owned(),
                    shards: 4,
                    meta_size: Bytes::KILOBYTE,
                    node_size: Bytes::KILOBYTE,
                    max_disk_usage: Bytes::KILOBYTE * 4,
                    pool: PoolConfig {
                        block_size: Bytes::KILOBYTE,
                        capacity: 100,
                    },
                },
                StoreConfig {
                    dir: "./lich2/".to_owned(),
                    shards: 100,
                    meta_size: Bytes::KILOBYTE,
                    node_size: Bytes::KILOBYTE * 2,
                    max_disk_usage: Bytes::GIGABYTE * 8,
                    pool: PoolConfig {
                        block_size: Bytes::KILOBYTE * 4,
                        capacity: 4,
                    },
                },
            ],
            incoming_pool: PoolConfig {
                block_size: Bytes::KILOBYTE,
                capacity: 1024,
            },
            outgoing_pool: PoolConfig {
                block_size: Bytes::MIN,
                capacity: 1024,
            },
        }
    }

    #[test]
    fn test_node_config() {
        let example_toml = include_str!("../test/example.toml");
        let actual = from_str::<NodeConfig>(example_toml).expect("valid config");
        assert_eq!(actual, example());
    }

    #[test]
    fn test_config_round_trip() {
        let expected = example();
        let contents = toml::to_string(&expected).expect("serialize config");
        assert!(contents.contains("bandwidth = \"10Gb\""), "{contents}");
        assert!(contents.contains("max_disk_usage = \"8GB\""), "{contents}");
        let actual = from_str::<NodeConfig>(&contents).expect("valid config");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_link_config_defaults_burst() {
        let config = from_str::<LinkConfig>(
            r"
            addr = 'localhost:10000'
            bandwidth = '100Mb'
        ",
        )
        .expect("valid config");
        assert_eq!(
            config,
            LinkConfig {
                addr: "localhost:10000".to_string(),
                bandwidth: Bits::MEGABIT * 100,
                burst: Bits::MIN,
            }
        );
    }

    #[test]
    fn test_wrong_family_is_rejected() {
        let err = from_str::<PoolConfig>(
            r"
            block_size = '4Kb'
            capacity = 1
        ",
        )
        .expect_err("bits are not bytes");
        assert_matches!(err, Error::Toml(_));
        assert!(err.to_string().contains("Invalid Byte"), "{err}");
    }

    #[test]
    fn test_pool_size() {
        let pool = PoolConfig {
            block_size: Bytes::KILOBYTE * 4,
            capacity: 256,
        };
        assert_eq!(pool.size(), Bytes::MEGABYTE);
        assert_eq!(pool.size().to_string(), "1MB");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(include_str!("../test/example.toml").as_bytes())
            .expect("write config");
        let actual = from_file::<NodeConfig>(file.path()).expect("valid config");
        assert_eq!(actual, example());
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = from_file::<NodeConfig>(dir.path().join("lich.toml")).expect_err("missing");
        assert_matches!(err, Error::IO(_));
    }
}
