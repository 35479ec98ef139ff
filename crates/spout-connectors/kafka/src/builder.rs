use std::sync::Arc;

use spout_core::{Options, Result, Scheme};

use crate::config::{KafkaBatchConfig, KafkaSpoutConfig, ZkHosts};
use crate::hosts::ZkHostList;
use crate::options::{
    CLIENT_ID, CONSUMER_STATES_SUBPATH, DEFAULT_CLIENT_ID, DEFAULT_KAFKA_ROOT_PATH,
    DEFAULT_SPOUT_FETCH_SLEEP_INTERVAL_MS, DEFAULT_SPOUT_FETCH_THRESHOLD, DEFAULT_TOPIC,
    DEFAULT_ZOOKEEPER_SERVERS, KAFKA_ROOT_PATH, SPOUT_FETCH_SLEEP_INTERVAL_MS,
    SPOUT_FETCH_THRESHOLD, TOPIC, ZOOKEEPER_SERVERS,
};

/// Build the streaming spout configuration from a generic option map.
///
/// Pure assembly: no I/O happens here; the framework connects later using
/// the returned record. Fails when the `zookeeper.servers` entries disagree
/// on a port or an entry cannot be parsed; every other option falls back to
/// its default.
pub fn build_spout_config(
    options: &Options,
    scheme: Arc<dyn Scheme>,
) -> Result<KafkaSpoutConfig> {
    let zk_servers = options.str_or(ZOOKEEPER_SERVERS, DEFAULT_ZOOKEEPER_SERVERS);
    let kafka_root = options.str_or(KAFKA_ROOT_PATH, DEFAULT_KAFKA_ROOT_PATH);
    let topic = options.str_or(TOPIC, DEFAULT_TOPIC);
    let client_id = options.str_or(CLIENT_ID, DEFAULT_CLIENT_ID);

    let host_list = ZkHostList::parse(&zk_servers)?;

    // The root path starts with '/', so the connect string needs no
    // separator; brokers register under {kafka_root}/brokers.
    let hosts = ZkHosts::new(format!("{zk_servers}{kafka_root}"));
    let zk_root = format!("{kafka_root}/{CONSUMER_STATES_SUBPATH}");

    Ok(KafkaSpoutConfig {
        hosts,
        topic,
        zk_root,
        client_id,
        zk_servers: host_list.servers,
        zk_port: host_list.port,
        force_from_start: true,
        fetch_threshold: options.u64_or(SPOUT_FETCH_THRESHOLD, DEFAULT_SPOUT_FETCH_THRESHOLD),
        fetch_sleep_interval_ms: options.u64_or(
            SPOUT_FETCH_SLEEP_INTERVAL_MS,
            DEFAULT_SPOUT_FETCH_SLEEP_INTERVAL_MS,
        ),
        scheme,
    })
}

/// Build the micro-batch configuration from a generic option map.
///
/// Never fails: the server list is embedded in the descriptor verbatim, so
/// a malformed string surfaces later inside the framework rather than here.
pub fn build_batch_config(options: &Options, scheme: Arc<dyn Scheme>) -> KafkaBatchConfig {
    let zk_servers = options.str_or(ZOOKEEPER_SERVERS, DEFAULT_ZOOKEEPER_SERVERS);
    let kafka_root = options.str_or(KAFKA_ROOT_PATH, DEFAULT_KAFKA_ROOT_PATH);
    let topic = options.str_or(TOPIC, DEFAULT_TOPIC);
    let client_id = options.str_or(CLIENT_ID, DEFAULT_CLIENT_ID);

    KafkaBatchConfig {
        hosts: ZkHosts::new(format!("{zk_servers}{kafka_root}")),
        topic,
        client_id,
        scheme,
    }
}
