//! The persisted fixture record and its deterministic on-disk location.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::catalog::BlockEntry;
use crate::tracer::Tracer;

/// The only RPC method fixtures are generated for.
pub const TRACE_METHOD: &str = "debug_traceBlockByNumber";

/// Requests carry a constant id so that regenerated fixtures differ only
/// where the chain state differs.
pub(crate) const REQUEST_ID: u64 = 1;

/// Fixtures always record an HTTP 200 exchange; JSON-RPC level failures
/// live inside the response body.
const FIXTURE_STATUS_CODE: u16 = 200;

/// The exact JSON-RPC envelope sent to the node.
#[derive(Debug, Clone, Serialize)]
pub struct TraceRequest {
    jsonrpc: &'static str,
    method: &'static str,
    pub params: (String, TracerOptions),
    id: u64,
}

/// Second positional parameter of `debug_traceBlockByNumber`.
#[derive(Debug, Clone, Serialize)]
pub struct TracerOptions {
    tracer: String,
    #[serde(rename = "tracerConfig", skip_serializing_if = "Option::is_none")]
    tracer_config: Option<Map<String, Value>>,
}

impl TraceRequest {
    pub fn new(
        block_id: &str,
        tracer_name: &str,
        tracer_config: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            jsonrpc: "2.0",
            method: TRACE_METHOD,
            params: (
                block_id.to_string(),
                TracerOptions {
                    tracer: tracer_name.to_string(),
                    tracer_config,
                },
            ),
            id: REQUEST_ID,
        }
    }
}

/// One persisted request/response pair.
#[derive(Debug, Clone, Serialize)]
pub struct Fixture {
    pub request: TraceRequest,
    pub response: Value,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl Fixture {
    pub fn new(request: TraceRequest, response: Value) -> Self {
        Self {
            request,
            response,
            status_code: FIXTURE_STATUS_CODE,
        }
    }

    /// Pretty-prints the fixture to `path`, creating intermediate
    /// directories and replacing any file left by a previous run.
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create fixture directory {}", parent.display())
            })?;
        }
        let pretty = serde_json::to_string_pretty(self)?;
        fs::write(path, pretty)
            .with_context(|| format!("failed to write fixture {}", path.display()))
    }
}

/// Fixture location for one (block, variant) pair.
///
/// Filenames embed the catalog ordinal, so trees generated from the same
/// catalog line up file-for-file across node versions and can be diffed.
pub fn spec_path(
    root: &Path,
    tracer: &Tracer,
    variant: Option<&str>,
    index: usize,
    entry: &BlockEntry,
) -> PathBuf {
    let mut path = root.join(tracer.slug());
    if let Some(variant) = variant {
        path.push(variant);
    }
    path.push(format!(
        "{index}-debug-{slug}-{id}-{label}.json",
        slug = tracer.slug(),
        id = entry.id,
        label = entry.label,
    ));
    path
}
