use undercover_server::UndercoverServer;
use undercover_words::WordBank;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:9090".to_string());

    let server = UndercoverServer::bind(&addr, WordBank::builtin()).await?;
    tracing::info!(addr = %server.local_addr()?, "ready for players");
    server.run().await?;
    Ok(())
}
