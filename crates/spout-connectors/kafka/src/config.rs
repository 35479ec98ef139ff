use serde::{Deserialize, Serialize};
use spout_core::Scheme;
use std::fmt;
use std::sync::Arc;

/// Path under the Zookeeper root where Kafka registers broker metadata.
pub const DEFAULT_BROKER_PATH: &str = "/brokers";

/// Broker discovery descriptor: where the framework finds Kafka broker
/// metadata in Zookeeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZkHosts {
    /// Zookeeper connect string including the Kafka root path,
    /// e.g. `"zk1:2181,zk2:2181/kafka"`.
    pub connect_string: String,

    /// Path under the root where brokers register themselves.
    pub broker_path: String,
}

impl ZkHosts {
    pub fn new(connect_string: impl Into<String>) -> Self {
        Self {
            connect_string: connect_string.into(),
            broker_path: DEFAULT_BROKER_PATH.to_string(),
        }
    }
}

/// Configuration for the continuously running per-message Kafka spout.
///
/// Built once per submission and handed to the framework, which owns it
/// thereafter; nothing here is mutated after construction.
#[derive(Clone)]
pub struct KafkaSpoutConfig {
    /// Broker discovery descriptor.
    pub hosts: ZkHosts,

    /// Topic to consume from.
    pub topic: String,

    /// Zookeeper path where consumer offsets are persisted.
    pub zk_root: String,

    /// Identifier namespacing this application's offset state.
    pub client_id: String,

    /// Zookeeper ensemble host names.
    pub zk_servers: Vec<String>,

    /// Port shared by every Zookeeper server.
    pub zk_port: u16,

    /// Re-read the topic from the earliest offset on startup.
    pub force_from_start: bool,

    /// Pending-tuple count at which the spout stops fetching.
    pub fetch_threshold: u64,

    /// Sleep between fetch attempts while throttled.
    pub fetch_sleep_interval_ms: u64,

    /// Decoder applied to raw message payloads.
    pub scheme: Arc<dyn Scheme>,
}

impl fmt::Debug for KafkaSpoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KafkaSpoutConfig")
            .field("hosts", &self.hosts)
            .field("topic", &self.topic)
            .field("zk_root", &self.zk_root)
            .field("client_id", &self.client_id)
            .field("zk_servers", &self.zk_servers)
            .field("zk_port", &self.zk_port)
            .field("force_from_start", &self.force_from_start)
            .field("fetch_threshold", &self.fetch_threshold)
            .field("fetch_sleep_interval_ms", &self.fetch_sleep_interval_ms)
            .field("scheme", &self.scheme.name())
            .finish()
    }
}

/// Configuration for the micro-batch (trident-style) Kafka input.
///
/// Lighter than the spout variant: no offset path and no host-list
/// validation; the raw server string is embedded in the descriptor as-is.
#[derive(Clone)]
pub struct KafkaBatchConfig {
    /// Broker discovery descriptor.
    pub hosts: ZkHosts,

    /// Topic to consume from.
    pub topic: String,

    /// Application identifier.
    pub client_id: String,

    /// Decoder applied to raw message payloads.
    pub scheme: Arc<dyn Scheme>,
}

impl fmt::Debug for KafkaBatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KafkaBatchConfig")
            .field("hosts", &self.hosts)
            .field("topic", &self.topic)
            .field("client_id", &self.client_id)
            .field("scheme", &self.scheme.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spout_core::RawScheme;

    #[test]
    fn test_zk_hosts_default_broker_path() {
        let hosts = ZkHosts::new("zk1:2181/kafka");
        assert_eq!(hosts.connect_string, "zk1:2181/kafka");
        assert_eq!(hosts.broker_path, "/brokers");
    }

    #[test]
    fn test_debug_prints_scheme_name() {
        let config = KafkaBatchConfig {
            hosts: ZkHosts::new("localhost:2181/kafka"),
            topic: "storm".to_string(),
            client_id: "storm-app".to_string(),
            scheme: Arc::new(RawScheme),
        };

        let rendered = format!("{config:?}");
        assert!(rendered.contains("\"raw\""), "{rendered}");
    }
}
