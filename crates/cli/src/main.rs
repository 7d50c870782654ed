use anyhow::{Context, Result};
use bookdrop_library::{
    Organizer, OrganizerConfig, DEFAULT_EXTRACT_TIMEOUT_MS, DEFAULT_SETTLE_DELAY_MS,
};
use clap::{Arg, Command};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

fn build_cli() -> Command {
    Command::new("bookdrop")
        .version("0.1.0")
        .about("Files dropped EPUBs into per-author and per-series folders")
        .arg(
            Arg::new("root")
                .value_name("ROOT_DIR")
                .help("Directory to sweep and watch (falls back to the ROOT_DIR environment variable)"),
        )
        .arg(
            Arg::new("timeout-ms")
                .short('t')
                .long("timeout-ms")
                .value_name("MS")
                .help("Deadline for metadata extraction per file")
                .value_parser(clap::value_parser!(u64))
                .default_value("5000"),
        )
        .arg(
            Arg::new("settle-ms")
                .short('s')
                .long("settle-ms")
                .value_name("MS")
                .help("Wait after a file appears before processing it")
                .value_parser(clap::value_parser!(u64))
                .default_value("1000"),
        )
}

fn resolve_root(matches: &clap::ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("root")
        .cloned()
        .or_else(|| std::env::var("ROOT_DIR").ok())
        .map(PathBuf::from)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = build_cli().get_matches();

    let Some(root) = resolve_root(&matches) else {
        eprintln!("ERROR: no root directory given; pass ROOT_DIR or set the ROOT_DIR environment variable.");
        std::process::exit(1);
    };
    if !root.is_dir() {
        eprintln!("ERROR: root directory {} does not exist or is not a directory.", root.display());
        std::process::exit(1);
    }

    let timeout_ms = matches
        .get_one::<u64>("timeout-ms")
        .copied()
        .unwrap_or(DEFAULT_EXTRACT_TIMEOUT_MS);
    let settle_ms = matches
        .get_one::<u64>("settle-ms")
        .copied()
        .unwrap_or(DEFAULT_SETTLE_DELAY_MS);

    info!("Root directory: {}", root.display());

    let config = OrganizerConfig::new(root)
        .with_extract_timeout(Duration::from_millis(timeout_ms))
        .with_settle_delay(Duration::from_millis(settle_ms));

    let organizer = Organizer::new(config);
    organizer.run().await.context("directory watch failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let matches = build_cli().get_matches_from(["bookdrop", "/books"]);
        assert_eq!(resolve_root(&matches), Some(PathBuf::from("/books")));
        assert_eq!(matches.get_one::<u64>("timeout-ms"), Some(&5000));
        assert_eq!(matches.get_one::<u64>("settle-ms"), Some(&1000));
    }

    #[test]
    fn test_cli_policy_overrides() {
        let matches =
            build_cli().get_matches_from(["bookdrop", "/books", "-t", "250", "-s", "10"]);
        assert_eq!(matches.get_one::<u64>("timeout-ms"), Some(&250));
        assert_eq!(matches.get_one::<u64>("settle-ms"), Some(&10));
    }
}
