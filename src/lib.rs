//! Segeval - speech segmentation quality scoring CLI tool.
//!
//! Compares an automatic segmentation against a reference segmentation
//! and reports boundary detection metrics: hit rate, over-segmentation
//! rate, precision, recall, F-measure and the R-value.

#![warn(missing_docs)]

pub mod cli;
pub mod constants;
pub mod error;
pub mod eval;
pub mod loader;
pub mod output;

use clap::Parser;
use cli::Cli;
use constants::DEFAULT_TOLERANCE_SECS;
use eval::{EvalCounts, count_hits, extract_boundaries};
use loader::{SegmentFormat, SegmentMap, load_segments};
use tracing::{debug, info, trace};

pub use error::{Error, Result};

/// Main entry point for the segeval CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let ref_format = SegmentFormat::from_path(&cli.reference)?;
    let hyp_format = SegmentFormat::from_path(&cli.hypothesis)?;

    info!("Loading reference segmentation: {}", cli.reference.display());
    let references = load_segments(&cli.reference, ref_format, cli.ref_tier)?;
    info!("Loading studied segmentation: {}", cli.hypothesis.display());
    let hypotheses = load_segments(&cli.hypothesis, hyp_format, cli.hyp_tier)?;

    let counts = evaluate(&references, &hypotheses)?;
    let metrics = counts.metrics()?;

    output::print_report(&metrics)?;
    Ok(())
}

/// Accumulate hit and boundary counts over every recording in the
/// hypothesis set.
///
/// # Errors
///
/// Returns [`Error::MissingReference`] for a hypothesis recording absent
/// from the reference set, or a boundary extraction error for a
/// non-contiguous segmentation. No partial counts are produced.
pub fn evaluate(references: &SegmentMap, hypotheses: &SegmentMap) -> Result<EvalCounts> {
    let mut counts = EvalCounts::default();

    for (file, hyp_segments) in hypotheses {
        let ref_segments = references
            .get(file)
            .ok_or_else(|| Error::MissingReference { file: file.clone() })?;

        let ref_boundaries = extract_boundaries(file, ref_segments)?;
        let hyp_boundaries = extract_boundaries(file, hyp_segments)?;
        for boundary in &ref_boundaries {
            trace!("{file} ref {boundary}");
        }
        for boundary in &hyp_boundaries {
            trace!("{file} hyp {boundary}");
        }

        let hits = count_hits(&ref_boundaries, &hyp_boundaries, DEFAULT_TOLERANCE_SECS);
        debug!(
            "{file}: {hits} hit(s), {} reference / {} hypothesis boundaries",
            ref_boundaries.len(),
            hyp_boundaries.len()
        );

        counts.record_file(hits, ref_boundaries.len(), hyp_boundaries.len());
    }

    Ok(counts)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // The report goes to stdout; all diagnostics go to stderr.
    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
