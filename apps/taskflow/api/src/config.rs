use core_config::{server::ServerConfig, AppInfo, FromEnv};

use crate::api_info;

pub use core_config::Environment;

/// Application-specific configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000 unless overridden

        Ok(Self {
            app: api_info(),
            server,
            environment,
        })
    }
}
