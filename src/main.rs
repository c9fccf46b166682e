use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use pawmatch::config::{LoggingSettings, Settings};
use pawmatch::core::Matcher;
use pawmatch::routes::{self, AppState};
use pawmatch::services::{seed_sample_data, MemoryStore, RecommendationCache, Repository};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {}", e)))?;

    init_logging(&settings.logging);
    info!("Starting PawMatch service...");

    let store = Arc::new(MemoryStore::new());
    if settings.seed.enabled {
        if let Err(e) = seed_sample_data(store.as_ref()).await {
            error!("Failed to seed sample data: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    }
    let repo: Arc<dyn Repository> = store;

    let cache = if settings.cache.enabled {
        info!(
            "Recommendation cache enabled ({} entries, TTL: {}s)",
            settings.cache.max_entries, settings.cache.ttl_secs
        );
        RecommendationCache::new(settings.cache.max_entries, settings.cache.ttl_secs)
    } else {
        info!("Recommendation cache disabled");
        RecommendationCache::disabled()
    };

    let matcher = Matcher::new(settings.scoring.weights);
    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let app_state = AppState {
        repo,
        matcher,
        cache,
        recommendations: settings.recommendations.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
