//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Score an automatic speech segmentation against a reference
/// segmentation.
#[derive(Debug, Parser)]
#[command(name = "segeval")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reference segmentation (CTM or TextGrid).
    pub reference: PathBuf,

    /// Studied segmentation (CTM or TextGrid).
    pub hypothesis: PathBuf,

    /// TextGrid tier index for the reference side.
    #[arg(long, default_value_t = 0, env = "SEGEVAL_REF_TIER")]
    pub ref_tier: usize,

    /// TextGrid tier index for the hypothesis side.
    #[arg(long, default_value_t = 0, env = "SEGEVAL_HYP_TIER")]
    pub hyp_tier: usize,

    /// Suppress informational logging.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
