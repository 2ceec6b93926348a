//! Development resource store for the storefront.
//!
//! Serves the `customers`, `phoneLines`, `packages` and `transactions`
//! collections over REST with json-server style CRUD, backed by memory.

pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::path::PathBuf;

use crate::store::ResourceStore;

pub const DEFAULT_PORT: u16 = 3001;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    store: ResourceStore,
) -> std::io::Result<Server> {
    let store = web::Data::new(store);
    let allowed_origins = config.allowed_origins.clone();

    // port 0 lets the OS pick
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .app_data(routes::json_config())
            .app_data(store.clone())
            .service(routes::api_services())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// `*` anywhere in the list opens the store to every origin.
fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin
    pub allowed_origins: Vec<String>,
    /// JSON file to seed the store from instead of the built-in dataset
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let port = match var("PORT") {
            Ok(port) => port.parse()?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into()),
            port,
            allowed_origins,
            seed_file: var("SEED_FILE").ok().map(PathBuf::from),
        })
    }

    /// The store this config asks for: the seed file if one is named,
    /// otherwise the demo dataset.
    pub fn load_store(&self) -> anyhow::Result<ResourceStore> {
        match &self.seed_file {
            Some(path) => ResourceStore::from_file(path),
            None => Ok(ResourceStore::new(store::seed::demo_database()?)),
        }
    }
}
