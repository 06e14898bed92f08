//! `predict-gateway` binary: the HTTP front door.

use anops_bootstrap::{CommonArgs, init_logging, shutdown_token, to_pretty_json};
use anyhow::Context;
use clap::Parser;
use predict_gateway::GatewayConfig;
use tokio::net::TcpListener;

/// HTTP gateway forwarding predictions to the model worker
#[derive(Parser)]
#[command(name = "predict-gateway", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = GatewayConfig::load(cli.common.config.as_deref())
        .context("failed to load gateway configuration")?;

    if cli.common.print_config {
        println!("{}", to_pretty_json(&cfg)?);
        return Ok(());
    }

    init_logging(&cfg.logging, cli.common.verbose);

    let listener = TcpListener::bind(cfg.bind_addr.as_str())
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
    let cancel = shutdown_token();

    predict_gateway::run(&cfg, listener, cancel).await
}
