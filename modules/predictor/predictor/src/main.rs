//! `predictor` binary: the model worker.

use anops_bootstrap::{CommonArgs, init_logging, shutdown_token, to_pretty_json};
use anops_transport_grpc::bind_tcp;
use anyhow::Context;
use clap::Parser;
use predictor::PredictorConfig;

/// Model worker serving predictions over gRPC
#[derive(Parser)]
#[command(name = "predictor", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = PredictorConfig::load(cli.common.config.as_deref())
        .context("failed to load predictor configuration")?;

    if cli.common.print_config {
        println!("{}", to_pretty_json(&cfg)?);
        return Ok(());
    }

    init_logging(&cfg.logging, cli.common.verbose);

    let listener = bind_tcp(&cfg.listen_addr).await?;
    let cancel = shutdown_token();

    predictor::run(&cfg, listener, cancel).await
}
