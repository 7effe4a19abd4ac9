//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory holding `config.toml` and `roster.ron`.
    pub data_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BRAWL_DATA_DIR` - content directory used when `--data-dir` is not given
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("BRAWL_DATA_DIR"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
