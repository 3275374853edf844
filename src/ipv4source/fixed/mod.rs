use std::net::Ipv4Addr;

use super::{Ipv4Source, SourceError};

/// A trivial source that always returns the same address.
/// Useful for testing and for hosts whose address is managed externally.
pub struct FixedSource {
    addr: Ipv4Addr,
}

impl Ipv4Source for FixedSource {
    fn addr(&self) -> Result<Ipv4Addr, SourceError> {
        Ok(self.addr)
    }
}

impl FixedSource {
    pub fn create(address: Ipv4Addr) -> Box<dyn Ipv4Source> {
        Box::new(FixedSource { addr: address })
    }
}
