//! Fetch, filter and print, behind one error boundary.
//!
//! Every failure before printing (client setup, network, status, decoding, a
//! missing key the filter has to read) ends the same way: a single empty line
//! on the output. A caller cannot tell a failed fetch from an empty result by
//! anything other than that line.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::client::{DevicesClient, Fetch};
use crate::config::Config;
use crate::filter::{matching_codenames, write_matches};
use crate::models::DeviceRecord;

/// Runs the pipeline with the given client. Only errors writing to `out` escape.
pub fn run<F: Fetch, W: Write>(client: &DevicesClient<F>, out: &mut W) -> std::io::Result<()> {
    emit(client.fetch_devices(), client.config().get_target_version(), out)
}

/// Runs the pipeline over HTTP against the hardcoded source and target.
pub fn run_default<W: Write>(out: &mut W) -> std::io::Result<()> {
    let config = Config::default();
    let devices = DevicesClient::new(config.clone()).and_then(|client| client.fetch_devices());
    emit(devices, config.get_target_version(), out)
}

fn emit<W: Write>(devices: Result<Vec<DeviceRecord>>, target: &str, out: &mut W) -> std::io::Result<()> {
    // Matches are resolved in full before writing, so a failure never leaves partial output
    let selected = devices.and_then(|records| {
        let codenames = matching_codenames(&records, target)?;
        debug!("{} of {} devices support {}", codenames.len(), records.len(), target);
        Ok(codenames)
    });

    match selected {
        Ok(codenames) => {
            write_matches(out, &codenames)?;
        }
        Err(e) => {
            debug!("Device list unavailable: {:#}", e);
            writeln!(out)?;
        }
    }
    out.flush()
}
