use std::{
    env,
    fmt::{self, Display},
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    str::FromStr,
};

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub recipes_file: PathBuf,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: try_load(&lookup, "RECIPE_BOX_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "RECIPE_BOX_PORT", "5000")?,
            recipes_file: try_load(&lookup, "RECIPE_BOX_RECIPES_FILE", "recipes.json")?,
            data_dir: try_load(&lookup, "RECIPE_BOX_DATA_DIR", "data")?,
            static_dir: try_load(&lookup, "RECIPE_BOX_STATIC_DIR", "static")?,
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug)]
pub struct ConfigError {
    key: String,
    info: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} value: {}", self.key, self.info)
    }
}

impl std::error::Error for ConfigError {}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| ConfigError {
        key: key.to_string(),
        info: e.to_string(),
    })
}
