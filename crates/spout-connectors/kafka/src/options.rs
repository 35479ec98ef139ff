//! Option keys and defaults recognized by the Kafka connector builders.

/// Comma-separated `host:port` list for the Zookeeper ensemble.
pub const ZOOKEEPER_SERVERS: &str = "zookeeper.servers";

/// Root path under which broker metadata and consumer state are namespaced.
pub const KAFKA_ROOT_PATH: &str = "kafka.root.path";

/// Topic to consume from.
pub const TOPIC: &str = "topic";

/// Identifier namespacing this application's consumer offset state.
pub const CLIENT_ID: &str = "client_id";

/// Pending-tuple count at which the spout stops fetching.
pub const SPOUT_FETCH_THRESHOLD: &str = "spout.fetch.threshold";

/// Sleep between fetch attempts while throttled.
pub const SPOUT_FETCH_SLEEP_INTERVAL_MS: &str = "spout.fetch.sleep.interval.ms";

pub const DEFAULT_ZOOKEEPER_SERVERS: &str = "localhost:2181";
pub const DEFAULT_KAFKA_ROOT_PATH: &str = "/kafka";
pub const DEFAULT_TOPIC: &str = "storm";
pub const DEFAULT_CLIENT_ID: &str = "storm-app";
pub const DEFAULT_SPOUT_FETCH_THRESHOLD: u64 = 5000;
pub const DEFAULT_SPOUT_FETCH_SLEEP_INTERVAL_MS: u64 = 1000;

/// Subpath under the Kafka root where consumer offsets are persisted.
pub const CONSUMER_STATES_SUBPATH: &str = "storm-consumer-states";
