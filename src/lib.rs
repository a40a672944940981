pub mod client;
pub mod config;
pub mod filter;
pub mod models;
pub mod pipeline;

pub use client::{parse_devices, DevicesClient, Fetch, HttpFetcher};
pub use config::Config;
pub use filter::{matching_codenames, supports_version, write_matches};
pub use models::{DeviceRecord, VersionEntry};
pub use pipeline::{run, run_default};
