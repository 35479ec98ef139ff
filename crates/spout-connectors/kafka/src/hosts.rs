use spout_core::{Error, Result};

/// Zookeeper ensemble parsed from a comma-separated `host:port` list.
///
/// Invariant: every entry shares one port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZkHostList {
    /// Host names, in input order.
    pub servers: Vec<String>,

    /// Port shared by every server.
    pub port: u16,
}

impl ZkHostList {
    /// Parse `"zk1:2181,zk2:2181"` into host names and the shared port.
    ///
    /// Each entry is split on its last colon. An entry whose port differs
    /// from the first entry's port fails with [`Error::ZkPortMismatch`];
    /// an entry with no colon or a non-numeric port fails with
    /// [`Error::InvalidHostEntry`].
    pub fn parse(raw: &str) -> Result<Self> {
        let mut servers = Vec::new();
        let mut port = 0u16;

        for (i, entry) in raw.split(',').enumerate() {
            let (host, entry_port) = split_host_port(entry)?;
            if i == 0 {
                port = entry_port;
            } else if entry_port != port {
                return Err(Error::ZkPortMismatch {
                    server: entry.to_string(),
                    port: entry_port,
                    expected: port,
                });
            }
            servers.push(host.to_string());
        }

        Ok(Self { servers, port })
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

fn split_host_port(entry: &str) -> Result<(&str, u16)> {
    let (host, port) = entry
        .rsplit_once(':')
        .ok_or_else(|| Error::InvalidHostEntry {
            entry: entry.to_string(),
            reason: "expected host:port".to_string(),
        })?;

    let port = port.parse::<u16>().map_err(|_| Error::InvalidHostEntry {
        entry: entry.to_string(),
        reason: format!("port '{}' is not a number", port),
    })?;

    Ok((host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_entry() {
        let hosts = ZkHostList::parse("localhost:2181").unwrap();
        assert_eq!(hosts.servers, vec!["localhost"]);
        assert_eq!(hosts.port, 2181);
    }

    #[test]
    fn test_parse_keeps_entry_order_and_count() {
        let hosts = ZkHostList::parse("zk1:2181,zk2:2181,zk3:2181").unwrap();
        assert_eq!(hosts.servers, vec!["zk1", "zk2", "zk3"]);
        assert_eq!(hosts.len(), 3);
        assert_eq!(hosts.port, 2181);
    }

    #[test]
    fn test_port_mismatch_rejected() {
        let err = ZkHostList::parse("a:2181,b:2182").unwrap_err();
        match err {
            Error::ZkPortMismatch {
                server,
                port,
                expected,
            } => {
                assert_eq!(server, "b:2182");
                assert_eq!(port, 2182);
                assert_eq!(expected, 2181);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mismatch_detected_at_any_position() {
        // Each entry is checked against the first entry's port, not just
        // the second one.
        assert!(ZkHostList::parse("a:2181,b:2181,c:2182").is_err());
        assert!(ZkHostList::parse("a:2181,b:2182,c:2181").is_err());
    }

    #[test]
    fn test_mismatch_error_names_both_ports() {
        let err = ZkHostList::parse("a:2181,b:2182").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("2181"), "missing expected port: {message}");
        assert!(message.contains("2182"), "missing conflicting port: {message}");
        assert!(message.contains("b:2182"), "missing server: {message}");
    }

    #[test]
    fn test_entry_without_colon_rejected() {
        assert!(matches!(
            ZkHostList::parse("localhost").unwrap_err(),
            Error::InvalidHostEntry { .. }
        ));
    }

    #[test]
    fn test_non_numeric_port_rejected() {
        assert!(matches!(
            ZkHostList::parse("localhost:zk").unwrap_err(),
            Error::InvalidHostEntry { .. }
        ));
    }

    #[test]
    fn test_empty_string_rejected() {
        assert!(ZkHostList::parse("").is_err());
    }

    #[test]
    fn test_splits_on_last_colon() {
        // Bracketed-IPv6-style hosts keep everything before the last colon.
        let hosts = ZkHostList::parse("[::1]:2181").unwrap();
        assert_eq!(hosts.servers, vec!["[::1]"]);
        assert_eq!(hosts.port, 2181);
    }
}
