pub mod api;

use crate::agent::CareBot;
use crate::cli::Args;
use log::info;
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    addr: String,
    bot: Arc<CareBot>,
    args: Args,
}

impl Server {
    pub fn new(addr: String, bot: Arc<CareBot>, args: Args) -> Self {
        Self { addr, bot, args }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = api::router(self.bot.clone(), &self.args.cors_origins);
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("HTTP API server listening on: http://{}", self.addr);
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
