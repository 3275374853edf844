//! A way to retrieve the IPv4 address reported to the DNS provider.
//! Each source implements the [`Ipv4Source`] trait.
//!
//! The following sources are currently available:
//! - [`InterfaceSource`]: Returns the first IPv4 address bound to a named network interface
//! - [`FixedSource`]: Returns a static IPv4 address

mod fixed;
mod interface;

pub use fixed::FixedSource;
pub use interface::InterfaceSource;

use std::net::Ipv4Addr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// The OS interface table could not be enumerated at all.
    #[error("could not enumerate interface addresses: {0}")]
    Enumeration(#[from] std::io::Error),
    /// No interface with the requested name exists.
    #[error("no interface named `{0}`")]
    InterfaceNotFound(String),
    /// The interface exists but carries no IPv4 address.
    #[error("no IPv4 address found for interface `{0}`")]
    NoIpv4(String),
}

/// An `Ipv4Source` can be used to retrieve a single IPv4 address for a DNS update.
pub trait Ipv4Source {
    fn addr(&self) -> Result<Ipv4Addr, SourceError>;
}
