use actix_web::{App, HttpServer, middleware, web};

use cohort::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    if !config.static_dir.is_dir() {
        log::warn!("Static directory {} not found, stylesheet will be missing", config.static_dir.display());
    }

    log::info!("Starting {} at http://{bind_addr}", config.app_name);

    let data = web::Data::new(config);

    HttpServer::new(move || {
        let session_mw = cohort::session_middleware(
            data.session_key.clone(),
            data.secure_cookies,
        );

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(data.clone())
            // Static files
            .service(actix_files::Files::new("/static", data.static_dir.clone()))
            .configure(cohort::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(cohort::handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
