//! procq HTTP 服务
//!
//! ```bash
//! procq-http --port 8080
//! curl http://localhost:8080/loadavg/average/15
//! ```

use anyhow::Context;
use clap::Parser;
use procq::Config;

#[derive(Parser)]
#[command(name = "procq-http")]
#[command(version)]
#[command(about = "Serve /proc as JSON over HTTP")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.config.init_logging();

    let app = procq::http::router(cli.config.procfs());
    let addr = format!("{}:{}", cli.bind, cli.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    log::info!("serving {} on http://{}", cli.config.root.display(), addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
