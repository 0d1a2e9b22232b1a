use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use production_mix::config::ServerConfig;
use production_mix::handlers::{json_config, routes, AppState};

fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    // Must outlive the server so queued events are flushed on shutdown
    let _sentry = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    actix_web::rt::System::new().block_on(run(config))
}

async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(&config));
    let json_limit = config.json_limit;

    log::info!(
        "Starting server on http://{}:{} (grid size {}, max {})",
        config.host,
        config.port,
        config.grid_size,
        config.max_grid_size,
    );

    HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(json_config(json_limit))
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
