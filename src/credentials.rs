#[cfg(test)]
mod tests;

use serde::Deserialize;

use crate::steam::Params;

/// The api key, app id and (optionally) player steam id every facade carries.
///
/// Nothing here is validated locally: a missing or wrong key is reported by steam when the
/// first request is made.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub app_id: u32,
    #[serde(default)]
    pub steam_id: Option<String>,
}

/// Per-field replacements applied when a facade hands its credentials down to another one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub app_id: Option<u32>,
    pub steam_id: Option<String>,
}

impl Credentials {
    pub fn new(api_key: &str, app_id: u32, steam_id: Option<&str>) -> Credentials {
        Credentials {
            api_key: api_key.to_string(),
            app_id,
            steam_id: steam_id.map(|s| s.to_string()),
        }
    }

    /// Each field is taken from `overrides` when set there, and from `self` otherwise.
    pub fn inherit(&self, overrides: Overrides) -> Credentials {
        Credentials {
            api_key: overrides.api_key.unwrap_or_else(|| self.api_key.clone()),
            app_id: overrides.app_id.unwrap_or(self.app_id),
            steam_id: overrides.steam_id.or_else(|| self.steam_id.clone()),
        }
    }

    /// `key` and `appid`, which every steam call carries.
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with("key", &self.api_key)
            .with("appid", self.app_id)
    }

    /// Like `params`, plus `steamid` when one is configured.
    pub(crate) fn player_params(&self) -> Params {
        self.params().with_opt("steamid", self.steam_id.as_deref())
    }
}

impl Overrides {
    pub fn api_key(mut self, api_key: &str) -> Overrides {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn app_id(mut self, app_id: u32) -> Overrides {
        self.app_id = Some(app_id);
        self
    }

    pub fn steam_id(mut self, steam_id: &str) -> Overrides {
        self.steam_id = Some(steam_id.to_string());
        self
    }
}
