mod builder;
mod config;
mod hosts;
pub mod options;

pub use builder::{build_batch_config, build_spout_config};
pub use config::{KafkaBatchConfig, KafkaSpoutConfig, ZkHosts, DEFAULT_BROKER_PATH};
pub use hosts::ZkHostList;
