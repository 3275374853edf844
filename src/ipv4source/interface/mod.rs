use std::net::Ipv4Addr;

use get_if_addrs::{IfAddr, Interface};

use super::{Ipv4Source, SourceError};

/// Resolves the IPv4 address of a local network interface by name.
///
/// The OS may report more than one address per interface; this source returns
/// the first IPv4 entry in whatever order the OS lists them. That order is
/// not guaranteed to be stable across platforms, so on a multi-address
/// interface "first" does not necessarily mean "primary".
///
/// IPv6 entries (including IPv4-mapped ones) are skipped.
pub struct InterfaceSource {
    interface: String,
}

impl Ipv4Source for InterfaceSource {
    fn addr(&self) -> Result<Ipv4Addr, SourceError> {
        let addrs = get_if_addrs::get_if_addrs()?;
        first_ipv4(&addrs, &self.interface)
    }
}

impl InterfaceSource {
    pub fn create(interface: impl Into<String>) -> Box<dyn Ipv4Source> {
        Box::new(InterfaceSource {
            interface: interface.into(),
        })
    }
}

/// Scan the interface table for the first IPv4 address bound to `name`.
fn first_ipv4(addrs: &[Interface], name: &str) -> Result<Ipv4Addr, SourceError> {
    let mut interface_seen = false;
    for iface in addrs.iter().filter(|i| i.name == name) {
        interface_seen = true;
        if let IfAddr::V4(v4) = &iface.addr {
            return Ok(v4.ip);
        }
    }
    if interface_seen {
        Err(SourceError::NoIpv4(name.to_string()))
    } else {
        Err(SourceError::InterfaceNotFound(name.to_string()))
    }
}
