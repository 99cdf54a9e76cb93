use std::sync::Arc;

use blockdb_api::{
    application::{
        http::server::http_server::{router, state},
        init_logger,
    },
    args::Args,
};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}{}", addr, args.server.root_path);

    axum::serve(listener, router).await?;

    Ok(())
}
