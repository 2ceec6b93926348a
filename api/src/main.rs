use api::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber},
};

/// Storefront resource API (development store)
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root. All are optional.
///
/// - IP_ADDRESS: Server bind address (default 127.0.0.1)
/// - PORT: Server port (default 3001)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, the default, or a
///   comma-separated list)
/// - SEED_FILE: JSON file with `customers`, `phoneLines`, `packages` and
///   `transactions` arrays. The built-in demo dataset is used otherwise.
///
/// Example development command:
/// cargo run -p api
///
/// Then, for the UI:
/// cd ui && BACKEND_URL=http://127.0.0.1:3001 trunk serve
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info");
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;
    let store = config.load_store()?;

    let server = build(&mut config, store)?;
    tracing::info!(
        "resource API listening on http://{}:{}",
        config.ip,
        config.port
    );
    server.await?;
    Ok(())
}
