//! Reads newline-separated decimal u64 fingerprints from a file and reports the
//! resulting coverage metrics. A thin exerciser for `CoverageTracker`, not the host
//! video pipeline: it has no video decode and no panorama stitching, it only feeds
//! pre-extracted fingerprints through the ingestion contract described in the crate
//! docs.
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use structopt::StructOpt;

use gamecov_core::config;
use gamecov_core::CoverageTracker;

#[derive(Debug, StructOpt)]
#[structopt(name = "coverage_from_ints", about = "Feed u64 fingerprints through a CoverageTracker")]
struct CommandLineArgs {
    #[structopt(parse(from_os_str))]
    input_filename: PathBuf,

    /// Hamming-distance clustering radius (0..=64). Falls back to GAMECOV_RADIUS,
    /// then to 8, if not given.
    #[structopt(short = "r", long = "radius")]
    radius: Option<u8>,
}

fn main() -> Result<(), Box<dyn Error + 'static>> {
    tracing_subscriber_init();

    let opts = CommandLineArgs::from_args();
    let radius = opts.radius.unwrap_or_else(|| config::radius_from_env(8));
    let mut tracker = CoverageTracker::new(radius);

    let lines = BufReader::new(File::open(&opts.input_filename)?).lines();
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fingerprint: u64 = trimmed.parse()?;
        tracker.add(fingerprint);
    }

    println!("radius: {}", tracker.radius());
    println!("distinct_count: {}", tracker.distinct_count());
    println!("component_count: {}", tracker.component_count());
    Ok(())
}

fn tracing_subscriber_init() {
    // Best effort: a host embedding this binary may already have installed a
    // subscriber, in which case this silently no-ops.
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder().finish(),
    );
}
