pub mod bench;
pub mod cl;
pub mod config;
pub mod device;
pub mod host;
pub mod sizes;
pub mod stats;
pub mod transfer;
