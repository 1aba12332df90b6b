//! Serve command - run the contract review web UI

use std::sync::Arc;

use clap::Args;
use counsel_core::Config;

use super::build_pipeline;
use crate::web;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides config and env)
    #[arg(short, long, env = "COUNSEL_ADDR")]
    pub addr: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let pipeline = build_pipeline(config, true)?;
        let state = web::AppState {
            pipeline: Arc::new(pipeline),
        };
        let app = web::router(state, config.server.max_upload_bytes);

        let listener = tokio::net::TcpListener::bind(&config.server.addr).await?;
        tracing::info!(addr = %listener.local_addr()?, "Serving contract reviewer");
        println!("Contract reviewer running at http://{}", listener.local_addr()?);

        axum::serve(listener, app).await?;
        Ok(())
    }
}
