use std::path::PathBuf;

use alloy::transports::http::reqwest::Url;
use clap::{Parser, ValueHint};

/// Generates `debug_traceBlockByNumber` test fixtures by querying a
/// running node for every block in the built-in catalog.
#[derive(Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Tracer to request, e.g. `4byteTracer`, `callTracer` or
    /// `prestateTracer`.
    #[arg(env = "TRACER")]
    pub(crate) tracer: String,

    /// The node RPC URL.
    #[arg(
        short = 'u',
        long,
        env = "RPC_URL",
        default_value = "http://localhost:8545",
        value_hint = ValueHint::Url
    )]
    pub(crate) rpc_url: Url,

    /// Root directory of the generated fixture tree.
    #[arg(
        short = 'o',
        long,
        env = "SPEC_OUTPUT_DIR",
        default_value = "specs",
        value_hint = ValueHint::DirPath
    )]
    pub(crate) output_dir: PathBuf,
}
