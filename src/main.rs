use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use shelter_match::config::Settings;
use shelter_match::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use shelter_match::services::SessionStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // LOG_LEVEL / LOG_FORMAT win over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());
    init_logging(&log_level, &log_format);

    info!("Starting Shelter Match service...");

    if settings.search.page_size < 1 {
        error!("search.page_size must be positive, got {}", settings.search.page_size);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid page size"));
    }

    let sessions = SessionStore::new(
        settings.session.max_sessions,
        settings.session.ttl_secs,
        settings.search.page_size,
    );

    info!(
        "Session store initialized (max: {} sessions, idle TTL: {}s)",
        settings.session.max_sessions, settings.session.ttl_secs
    );
    info!("Catalog service: {}", settings.upstream.base_url);

    let app_state = AppState {
        sessions,
        upstream: settings.upstream.clone(),
        cookie_name: settings.session.cookie_name.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
