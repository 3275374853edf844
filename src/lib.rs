//! Main crate for the `noip_updater` application.
//!
//! The binary performs exactly one update run per invocation; periodic
//! updates are left to an external scheduler such as cron.
//!
//! The following modules might be of interest if you want to add new functionality:
//! - [`config`] loads the JSON configuration file describing credentials and targets
//! - [`ipv4source`]s are used to retrieve the IPv4 address reported to the provider
//! - [`provider`]s push that address to a dynamic DNS service (currently no-ip.com)

#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod ipv4source;
pub mod provider;
