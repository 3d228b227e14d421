//! Shared networking defaults and helpers used by the load generator and the stub server.

/// Quote server the load generator targets when `--host` is omitted.
pub const DEFAULT_HOST: &str = "quoteserve.seng.uvic.ca";
/// TCP port of the quote server.
pub const DEFAULT_PORT: u16 = 4440;

/// Helper to format a host with a port like "host:port".
///
/// IPv6 literals are wrapped in brackets so the result stays parseable.
pub fn addr(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
