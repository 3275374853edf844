//! Dynamic DNS providers that records can be pushed to.
//!
//! A provider receives a hostname value and an IPv4 address and performs one
//! update call against its service. Currently only no-ip.com is implemented,
//! see [`NoipProvider`].

mod noip;

// Re-exports for convenience
pub use self::noip::{NoipProvider, NoipProviderConfig, NOIP_UPDATE_URL};

use std::net::Ipv4Addr;

use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The update endpoint URL could not be parsed. Unreachable for the
    /// built-in endpoint constant, but overrides go through the same path.
    #[error("invalid update endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    /// The HTTP request object could not be built.
    #[error("could not construct update request: {0}")]
    Request(reqwest::Error),
    /// Transport-level failure: DNS, connect, TLS or timeout.
    #[error("update request failed: {0}")]
    Network(reqwest::Error),
    /// The provider answered but did not accept the update.
    #[error("update rejected by provider ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// The provider's answer to a successful update call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOutcome {
    /// The record(s) now point at the submitted address
    Updated,
    /// The record(s) already pointed at the submitted address
    Unchanged,
}

/// A provider is any dynamic DNS service, such as no-ip.com.
/// One call to [`Provider::update()`] performs exactly one update request;
/// retrying is left to the next scheduled invocation of the program.
pub trait Provider {
    /// Point `hostname` (a comma-separated list is passed through to the
    /// service verbatim) at `ip`.
    fn update(&self, hostname: &str, ip: Ipv4Addr) -> Result<UpdateOutcome, ProviderError>;
}
