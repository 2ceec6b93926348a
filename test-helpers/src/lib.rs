use api::store::{Database, ResourceStore, seed};
use api::{Config, telemetry};
use payloads::{
    CustomerId, PackageId, PhoneLineId, requests, session::MemorySessionStorage,
};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    /// Direct handle on the server's data, for checking side effects.
    pub store: ResourceStore,
}

impl TestApp {
    /// An empty session store, as a browser with no saved login would have.
    pub fn fresh_session(&self) -> MemorySessionStorage {
        MemorySessionStorage::default()
    }

    /// Sign in with the demo credentials, returning the session they leave
    /// behind.
    pub async fn sign_in_demo(
        &self,
    ) -> anyhow::Result<(payloads::Customer, MemorySessionStorage)> {
        let storage = self.fresh_session();
        let customer =
            payloads::session::login(&self.client, &storage, &demo_credentials())
                .await?;
        Ok((customer, storage))
    }
}

pub async fn spawn_app_on_port(port: u16, database: Database) -> TestApp {
    let subscriber = telemetry::get_subscriber("error");
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let store = ResourceStore::new(database);
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
        seed_file: None,
    };

    let server = api::build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient::new(format!(
            "http://127.0.0.1:{}",
            config.port
        )),
        store,
    }
}

/// Use OS-assigned port for parallel testing. Every app gets its own copy of
/// the demo dataset.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0, seed::demo_database().unwrap()).await
}

/// Start with nothing in any collection.
pub async fn spawn_empty_app() -> TestApp {
    spawn_app_on_port(0, Database::default()).await
}

pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn demo_credentials() -> requests::LoginCredentials {
    requests::LoginCredentials {
        username: payloads::session::DEMO_USERNAME.into(),
        password: payloads::session::DEMO_PASSWORD.into(),
    }
}

/// The seeded customer with no phone lines.
pub const CUSTOMER_WITHOUT_LINES: CustomerId = CustomerId(2);
/// Active line owned by the demo customer.
pub const DEMO_ACTIVE_LINE: PhoneLineId = PhoneLineId(1);
/// Inactive line owned by the demo customer.
pub const DEMO_INACTIVE_LINE: PhoneLineId = PhoneLineId(2);
/// "Regular 15GB", Rp 50.000.
pub const REGULAR_PACKAGE: PackageId = PackageId(3);

/// Checkout for the regular package on the demo customer's active line.
pub fn checkout_details_a() -> requests::CheckoutDetails {
    requests::CheckoutDetails {
        phone_line_id: DEMO_ACTIVE_LINE,
        package_id: REGULAR_PACKAGE,
        amount_paid: 50_000,
        purchase_date: Some("2025-03-01T10:00:00Z".parse().unwrap()),
    }
}
