//! One-shot resolution of the quote server address.
use std::net::{SocketAddr, ToSocketAddrs};

use log::debug;
use quote_common::net::addr;
use quote_common::{QuoteError, Result};

/// Resolve `host:port` into the endpoint every request connects to.
///
/// The lookup happens once at startup since the destination is fixed. IPv4
/// results are preferred when the name maps to several addresses.
pub fn resolve_endpoint(host: &str, port: u16) -> Result<SocketAddr> {
    let target = addr(host, port);
    let candidates: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|source| QuoteError::Resolve {
            addr: target.clone(),
            source,
        })?
        .collect();
    debug!("{} resolved to {:?}", target, candidates);

    candidates
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or(QuoteError::NoAddress(target))
}
