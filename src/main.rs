pub mod modules;
pub use modules::auth;
pub use modules::connectivity;
pub use modules::content;
pub mod api;
pub mod health;
pub mod shared;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::identity_rest::{IdentityConfig, RestIdentityProvider};
use crate::auth::adapter::outgoing::session_file::FileSessionStore;
use crate::auth::application::services::auth_gate::AuthGate;
use crate::connectivity::adapter::outgoing::http_probe::HttpConnectivityProbe;
use crate::connectivity::application::monitor::ConnectivityMonitor;
use crate::connectivity::application::ports::outgoing::probe::ConnectivityProbe;
use crate::content::adapter::outgoing::rest_store::{RestContentStore, StoreConfig};
use crate::content::application::ports::incoming::content_api::ContentApi;
use crate::content::application::services::content_sync::ContentSync;
use crate::shared::api::custom_json_config;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentApi>,
    pub auth: AuthGate,
    pub connectivity: ConnectivityMonitor,
    pub store_probe: Arc<dyn ConnectivityProbe>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let session_file =
        env::var("SESSION_FILE").unwrap_or_else(|_| ".folio-session.json".to_string());
    let probe_interval: u64 = env::var("PROBE_INTERVAL_SECS")
        .unwrap_or_else(|_| "30".to_string())
        .parse()
        .expect("Invalid PROBE_INTERVAL_SECS");

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build HTTP client");

    // Outgoing adapters
    let store_config = StoreConfig::from_env();
    let store_probe: Arc<dyn ConnectivityProbe> = Arc::new(HttpConnectivityProbe::new(
        http.clone(),
        store_config.health_url(),
    ));
    let store = RestContentStore::new(http.clone(), store_config);

    let identity_provider = RestIdentityProvider::new(http, IdentityConfig::from_env());
    let session_store = FileSessionStore::new(PathBuf::from(session_file));

    // Gate and monitor
    let auth_gate = AuthGate::new(Arc::new(identity_provider), Arc::new(session_store)).await;

    let initially_online = store_probe.check().await;
    let connectivity = ConnectivityMonitor::new(initially_online);
    connectivity.spawn_sampler(
        Arc::clone(&store_probe),
        Duration::from_secs(probe_interval),
    );

    // The synchronization layer: initial load, then re-fetch on reconnect
    let content_sync = Arc::new(ContentSync::new(
        store,
        auth_gate.clone(),
        connectivity.clone(),
    ));
    content_sync.fetch_all().await;
    content_sync.spawn_reconnect_listener();

    let state = AppState {
        content: content_sync,
        auth: auth_gate,
        connectivity,
        store_probe,
    };

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/api-docs/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_session_handler);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::retry_fetch_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::add_project_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::add_service_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_service_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_service_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_contact_handler);
    // Connectivity
    cfg.service(crate::connectivity::adapter::incoming::web::routes::connectivity_status_handler);
    cfg.service(crate::connectivity::adapter::incoming::web::routes::set_connectivity_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
