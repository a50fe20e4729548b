use alloy::providers::RootProvider;
use alloy::transports::http::{Client, Http};
use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use spec_gen::tracer::Tracer;
use spec_gen::{catalog, generator};
use tracing::info;

#[path = "spec_gen/cli.rs"]
mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    spec_gen::tracing::init();

    let args = cli::Cli::parse();

    let tracer = Tracer::new(&args.tracer);
    let variants = tracer.variants();

    info!("{} spec generator", tracer.name());
    info!("connecting to node at {}", args.rpc_url);
    for variant in &variants {
        let dir = match &variant.label {
            Some(label) => args.output_dir.join(tracer.slug()).join(label),
            None => args.output_dir.join(tracer.slug()),
        };
        info!("output directory: {}", dir.display());
    }

    let provider: RootProvider<Http<Client>> = RootProvider::new_http(args.rpc_url);

    let summary = generator::generate(
        &provider,
        &tracer,
        &variants,
        catalog::entries(),
        &args.output_dir,
    )
    .await?;

    info!("generation complete");
    info!("generated {} fixture files", summary.files_written);
    info!("total trace results: {}", summary.total_results);
    if !summary.signatures.is_empty() {
        info!("{} distinct signatures seen:", summary.signatures.len());
        for signature in &summary.signatures {
            info!("  {signature}");
        }
    }

    Ok(())
}
