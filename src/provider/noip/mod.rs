use std::net::Ipv4Addr;

use http::StatusCode;
use log::{debug, trace};
use reqwest::{
    blocking::{Client, Request},
    header, Url,
};

use super::{Provider, ProviderError, UpdateOutcome};

/// Base URL of the no-ip.com update endpoint.
pub const NOIP_UPDATE_URL: &str = "https://dynupdate.no-ip.com/nic/update";

/// no-ip.com requires clients to identify themselves.
const USER_AGENT: &str = concat!("noip-updater/v", env!("CARGO_PKG_VERSION"));

/// A [`Provider`] for the no-ip.com dyndns2 API.
///
/// Performs an authenticated `GET /nic/update?hostname=...&myip=...` and maps
/// the dyndns2 result code onto an [`UpdateOutcome`].
/// The client applies no explicit timeout, so a stalled call is bounded only
/// by OS socket defaults; a supervising scheduler should enforce its own.
///
/// To create a provider, use the [`NoipProvider::from_config()`] function.
#[non_exhaustive]
pub struct NoipProvider {
    client: Client,
    endpoint: Url,
    username: String,
    password: String,
}

/// Configuration object for a [`NoipProvider`]. Must be supplied when creating a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoipProviderConfig<'a> {
    /// The account name to authenticate with, via HTTP basic auth
    pub username: &'a str,
    /// The account password
    pub password: &'a str,
    /// Update endpoint override, mainly useful for testing.
    /// `None` selects [`NOIP_UPDATE_URL`]
    pub endpoint: Option<&'a str>,
}

impl NoipProvider {
    pub fn from_config(config: &NoipProviderConfig) -> Result<Box<dyn Provider>, ProviderError> {
        let endpoint = Url::parse(config.endpoint.unwrap_or(NOIP_UPDATE_URL))?;

        Ok(Box::new(NoipProvider {
            client: Client::new(),
            endpoint,
            username: config.username.to_owned(),
            password: config.password.to_owned(),
        }))
    }

    /// Compose the update URL. The hostname value is passed through verbatim,
    /// commas and all; splitting a list is the service's job.
    fn update_url(&self, hostname: &str, ip: Ipv4Addr) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("hostname", hostname)
            .append_pair("myip", &ip.to_string());
        url
    }

    fn build_request(&self, hostname: &str, ip: Ipv4Addr) -> Result<Request, ProviderError> {
        self.client
            .get(self.update_url(hostname, ip))
            .basic_auth(&self.username, Some(&self.password))
            .header(header::USER_AGENT, USER_AGENT)
            .build()
            .map_err(ProviderError::Request)
    }
}

impl Provider for NoipProvider {
    fn update(&self, hostname: &str, ip: Ipv4Addr) -> Result<UpdateOutcome, ProviderError> {
        let request = self.build_request(hostname, ip)?;
        debug!("Sending update request to {}", request.url());

        let response = self
            .client
            .execute(request)
            .map_err(ProviderError::Network)?;
        let status = response.status();
        let body = response.text().map_err(ProviderError::Network)?;
        trace!("Provider response: {} {:?}", status, body);

        interpret_response(status, &body)
    }
}

/// Map a dyndns2 response onto an outcome.
///
/// Only status 200 can be a success, and even then the service reports soft
/// failures such as `badauth` or `abuse` in the body, so the body is
/// inspected as well. The result code is the first word of the body; `good`
/// and `nochg` are followed by the address that was set.
fn interpret_response(status: StatusCode, body: &str) -> Result<UpdateOutcome, ProviderError> {
    let body = body.trim();
    if status != StatusCode::OK {
        return Err(ProviderError::Rejected {
            status,
            body: body.to_owned(),
        });
    }
    match body.split_whitespace().next() {
        Some("good") => Ok(UpdateOutcome::Updated),
        Some("nochg") => Ok(UpdateOutcome::Unchanged),
        // badauth, nohost, notfqdn, badagent, abuse, !donator, 911 and
        // anything the service comes up with in the future
        _ => Err(ProviderError::Rejected {
            status,
            body: body.to_owned(),
        }),
    }
}
