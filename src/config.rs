use std::path::PathBuf;

use home::home_dir;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;
use thiserror::Error;
use toml;

use crate::credentials::Credentials;
use crate::steam::Hosts;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home dir")]
    NoHome,
    #[error("Failed to read config file {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub steam: Credentials,
    #[serde(default = "default_hosts")]
    pub hosts: HostsConfig,
}

#[serde_inline_default]
#[derive(Deserialize, Debug)]
pub struct HostsConfig {
    #[serde_inline_default("https://api.steampowered.com".to_string())]
    pub api: String,
    #[serde_inline_default("https://partner.steam-api.com".to_string())]
    pub partner: String,
    #[serde_inline_default("https://store.steampowered.com".to_string())]
    pub store: String,
}

fn default_hosts() -> HostsConfig {
    let hosts = Hosts::default();

    HostsConfig {
        api: hosts.api,
        partner: hosts.partner,
        store: hosts.store,
    }
}

impl Config {
    pub fn credentials(&self) -> Credentials {
        self.steam.clone()
    }

    pub fn hosts(&self) -> Hosts {
        Hosts {
            api: self.hosts.api.clone(),
            partner: self.hosts.partner.clone(),
            store: self.hosts.store.clone(),
        }
    }
}

pub fn parse(raw: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(raw)?)
}

/// Reads `path`, or `~/.steamworks/config.toml` when none is given.
pub fn read(path: Option<&PathBuf>) -> Result<Config, ConfigError> {
    let f = match path {
        Some(p) => p.clone(),
        None => {
            let mut f = home_dir().ok_or(ConfigError::NoHome)?;
            f.push(".steamworks/config.toml");
            f
        }
    };

    let raw = std::fs::read_to_string(&f).map_err(|e| ConfigError::Io(f.clone(), e))?;
    parse(&raw)
}
