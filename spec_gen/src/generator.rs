//! Drives the node over RPC and persists one fixture per
//! (catalog entry, tracer variant) pair.

use std::collections::BTreeSet;
use std::path::Path;

use alloy::providers::Provider;
use alloy::transports::{RpcError, Transport};
use anyhow::{ensure, Context as _};
use serde_json::{json, Value};
use tracing::info;

use crate::catalog::BlockEntry;
use crate::fixture::{spec_path, Fixture, TraceRequest, REQUEST_ID, TRACE_METHOD};
use crate::tracer::{Tracer, Variant};

/// Totals accumulated over one generation run.
///
/// Result counts and the signature set are operator-facing telemetry, not
/// a correctness check on the node's replies.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub files_written: usize,
    pub total_results: usize,
    /// Keys of per-transaction result mappings, for tracers whose output
    /// has that shape (the 4byte selector/size pairs). Empty otherwise.
    pub signatures: BTreeSet<String>,
}

/// Traces every catalog entry under every variant, in order, writing one
/// fixture per pair beneath `output_root`.
///
/// The node must answer an `eth_blockNumber` probe before any fixture is
/// written. A JSON-RPC error reply is captured as a fixture like any
/// other response; a transport-level failure aborts the run, leaving
/// fixtures written so far on disk.
pub async fn generate<ProviderT, TransportT>(
    provider: &ProviderT,
    tracer: &Tracer,
    variants: &[Variant],
    catalog: &[BlockEntry],
    output_root: &Path,
) -> anyhow::Result<GenerationSummary>
where
    ProviderT: Provider<TransportT>,
    TransportT: Transport + Clone,
{
    ensure!(!variants.is_empty(), "at least one tracer variant is required");

    let head = provider.get_block_number().await.context(
        "connectivity probe (eth_blockNumber) failed - is the node running at the configured RPC URL?",
    )?;
    info!("connected, node head is at block {head}");

    let mut summary = GenerationSummary::default();
    for variant in variants {
        if let Some(label) = &variant.label {
            info!("generating {} fixtures ({label})", tracer.name());
        }
        for (index, entry) in catalog.iter().enumerate() {
            let request = TraceRequest::new(entry.id, tracer.name(), variant.config.clone());
            info!("tracing block {} ({})", entry.id, entry.label);
            let response = match provider
                .raw_request::<_, Value>(TRACE_METHOD.into(), request.params.clone())
                .await
            {
                Ok(result) => json!({"jsonrpc": "2.0", "id": REQUEST_ID, "result": result}),
                Err(RpcError::ErrorResp(err)) => {
                    json!({"jsonrpc": "2.0", "id": REQUEST_ID, "error": err})
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("trace request for block {} ({}) failed", entry.id, entry.label)
                    })
                }
            };

            summary.total_results += result_count(&response);
            collect_signatures(&response, &mut summary.signatures);

            let path = spec_path(output_root, tracer, variant.label.as_deref(), index, entry);
            Fixture::new(request, response).write(&path)?;
            info!("wrote {}", path.display());
            summary.files_written += 1;
        }
    }

    Ok(summary)
}

/// Number of per-transaction traces in a reply, when the result is the
/// usual array shape.
fn result_count(response: &Value) -> usize {
    response
        .get("result")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Collects the keys of each per-transaction `result` mapping.
fn collect_signatures(response: &Value, signatures: &mut BTreeSet<String>) {
    let Some(traces) = response.get("result").and_then(Value::as_array) else {
        return;
    };
    for trace in traces {
        if let Some(mapping) = trace.get("result").and_then(Value::as_object) {
            signatures.extend(mapping.keys().cloned());
        }
    }
}
