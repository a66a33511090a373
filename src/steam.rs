pub mod conv;
pub mod params;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use ureq;

pub use params::Params;

#[derive(Error, Debug)]
pub enum SteamError {
    #[error("Could not reach steam: {0}")]
    Transport(ureq::Transport),
    #[error("Steam responded with HTTP status {0}")]
    Status(u16),
    #[error("An IO error occurred reading the steam response: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unexpected response from steam: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Steam reported a failure: {0}")]
    Api(String),
    #[error("Invalid request parameter: {0}")]
    Parameter(String),
}

impl From<ureq::Error> for SteamError {
    fn from(e: ureq::Error) -> SteamError {
        match e {
            ureq::Error::Status(code, _) => SteamError::Status(code),
            ureq::Error::Transport(t) => SteamError::Transport(t),
        }
    }
}

pub type Result<T> = std::result::Result<T, SteamError>;

/// The three steam hosts the web api is spread over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Host {
    /// Public read endpoints
    Api,
    /// Publisher-only endpoints, mostly mutations
    Partner,
    Store,
}

/// Base URLs for each `Host`; swapped out to point the client at a mock server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hosts {
    pub api: String,
    pub partner: String,
    pub store: String,
}

impl Default for Hosts {
    fn default() -> Hosts {
        Hosts {
            api: "https://api.steampowered.com".to_string(),
            partner: "https://partner.steam-api.com".to_string(),
            store: "https://store.steampowered.com".to_string(),
        }
    }
}

impl Hosts {
    /// Every host served from the same base URL
    pub fn single(base: &str) -> Hosts {
        Hosts {
            api: base.to_string(),
            partner: base.to_string(),
            store: base.to_string(),
        }
    }

    pub fn url(&self, host: Host, path: &str) -> String {
        let base = match host {
            Host::Api => &self.api,
            Host::Partner => &self.partner,
            Host::Store => &self.store,
        };

        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// Performs a single request and hands back the body of a successful (2xx) response.
pub trait HttpHandling: Send + Sync {
    fn get(&self, url: &str, params: &Params) -> Result<String>;
    fn post_form(&self, url: &str, form: &Params) -> Result<String>;
}

/// Blocking `HttpHandling` backed by ureq.
pub struct UreqHttp;

impl HttpHandling for UreqHttp {
    fn get(&self, url: &str, params: &Params) -> Result<String> {
        let req = params
            .iter()
            .fold(ureq::get(url), |req, (name, value)| req.query(name, value));

        Ok(req.call()?.into_string()?)
    }

    fn post_form(&self, url: &str, form: &Params) -> Result<String> {
        let pairs: Vec<(&str, &str)> = form.iter().collect();

        Ok(ureq::post(url).send_form(&pairs)?.into_string()?)
    }
}

/// Shared by every facade: where to send requests and how.
#[derive(Clone)]
pub struct SteamClient {
    http: Arc<dyn HttpHandling>,
    hosts: Hosts,
}

impl fmt::Debug for SteamClient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SteamClient").field("hosts", &self.hosts).finish()
    }
}

impl Default for SteamClient {
    fn default() -> SteamClient {
        SteamClient::new()
    }
}

impl SteamClient {
    pub fn new() -> SteamClient {
        SteamClient::with_hosts(Hosts::default())
    }

    pub fn with_hosts(hosts: Hosts) -> SteamClient {
        SteamClient::with_http(Arc::new(UreqHttp), hosts)
    }

    pub fn with_http(http: Arc<dyn HttpHandling>, hosts: Hosts) -> SteamClient {
        SteamClient { http, hosts }
    }

    pub fn hosts(&self) -> &Hosts {
        &self.hosts
    }

    /// GET with query-string parameters, decoding the body as `T`.
    pub fn get<T: DeserializeOwned>(&self, host: Host, path: &str, params: &Params) -> Result<T> {
        let url = self.hosts.url(host, path);
        log::debug!("GET {} [{}]", url, params.names());

        let body = self.http.get(&url, params)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Form-encoded POST, decoding the body as `T`.
    pub fn post<T: DeserializeOwned>(&self, host: Host, path: &str, form: &Params) -> Result<T> {
        let url = self.hosts.url(host, path);
        log::debug!("POST {} [{}]", url, form.names());

        let body = self.http.post_form(&url, form)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Form-encoded POST to an endpoint whose body carries nothing of interest.
    pub fn post_unit(&self, host: Host, path: &str, form: &Params) -> Result<()> {
        let url = self.hosts.url(host, path);
        log::debug!("POST {} [{}]", url, form.names());

        self.http.post_form(&url, form)?;
        Ok(())
    }
}
