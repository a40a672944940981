use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use official_devices::run_default;

/// Prints the codenames of devices supporting the current release, one per line.
/// Prints a single empty line when the device list cannot be fetched or parsed.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
struct Args {}

// example usage:
// ./target/release/official_devices
// RUST_LOG=official_devices=debug ./target/release/official_devices

/// Only `--help` and `--version` are honored; anything else on the command
/// line is ignored so a run never fails on its arguments.
fn parse_args<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Err(e)
        }
        Err(e) => {
            debug!("Ignoring command line: {}", e);
            Ok(Args::default())
        }
    }
}

fn main() {
    // stdout carries codenames only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let _args = parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_default(&mut out) {
        debug!("Failed to write to stdout: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        assert!(parse_args(["official_devices"]).is_ok());
    }

    #[test]
    fn test_stray_arguments_are_ignored() {
        assert!(parse_args(["official_devices", "extra-arg"]).is_ok());
        assert!(parse_args(["official_devices", "--bogus", "-x", "twelve"]).is_ok());
    }

    #[test]
    fn test_help_and_version_are_honored() {
        let help = parse_args(["official_devices", "--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);

        let version = parse_args(["official_devices", "--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
    }
}
