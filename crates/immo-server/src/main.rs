#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use immo_core::config::{CliOverrides, ImmoConfig};
use immo_core::tracing::init_tracing;
use immo_features::FeaturePipeline;
use immo_server::{router, AppState, LinearPriceModel};

/// Belgian property price estimation service.
#[derive(Debug, Parser)]
#[command(name = "immo-server", version, about)]
struct Args {
    /// Project config file (default: ./immo.toml when present).
    #[arg(long, env = "IMMO_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:8000.
    #[arg(long)]
    bind: Option<String>,

    /// Postal-code table (semicolon-delimited georef export).
    #[arg(long, conflicts_with = "no_geo_table")]
    geo_table: Option<String>,

    /// Skip the postal-code table and always approximate locations.
    #[arg(long)]
    no_geo_table: bool,

    /// JSON price model file.
    #[arg(long)]
    model: Option<String>,

    /// Log filter directive, e.g. immo_server=debug.
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn overrides(self) -> CliOverrides {
        CliOverrides {
            config_path: self.config,
            bind: self.bind,
            geo_enabled: if self.no_geo_table {
                Some(false)
            } else {
                self.geo_table.as_ref().map(|_| true)
            },
            geo_table_path: self.geo_table,
            model_path: self.model,
            log_filter: self.log_filter,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let overrides = Args::parse().overrides();
    let root = std::env::current_dir()?;
    let config = ImmoConfig::load(&root, Some(&overrides))?;

    init_tracing(Some(config.logging.effective_filter()));

    let addr = config.server.socket_addr()?;
    let model = LinearPriceModel::load(&config.model.effective_path())?;
    let pipeline = FeaturePipeline::from_config(&config.geo);
    tracing::info!(geo_source = ?pipeline.geo().primary_source(), "feature pipeline ready");

    let app = router(AppState::new(pipeline, Arc::new(model)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "immo-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("immo-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
