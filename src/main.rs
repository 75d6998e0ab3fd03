use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use log::{info, warn};
use mathsolve::api::{AppState, configure_routes};
use mathsolve::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Falling back to the process environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = config::AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    if app_config.mistral.api_key.is_none() {
        warn!("MISTRAL_API_KEY is not set; solve requests will fail until it is provided");
    }
    if app_config.secret_key.is_none() {
        warn!("SECRET_KEY is not set");
    }

    let bind = (app_config.host.clone(), app_config.port);
    let state = AppState::new(app_config);

    info!("Using model {}", state.solver.model());
    println!("🚀 Starting server...");
    println!("📊 Frontend available at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}
