use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use tera::Tera;

use smartfit::WARDROBE_STORAGE_KEY;
use smartfit::models::config::ServerConfig;
use smartfit::repository::WardrobeRepository;
use smartfit::repository::storage::FileStorage;
use smartfit::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("SMARTFIT"))
        .build()
        .and_then(|settings| settings.try_deserialize::<ServerConfig>())
        .unwrap_or_else(|e| {
            log::warn!("Failed to load configuration: {e}; using defaults");
            ServerConfig::default()
        });

    let tera = match Tera::new("templates/**/*.html") {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to load templates: {e}");
            return Err(std::io::Error::other(e));
        }
    };

    let storage = FileStorage::new(&server_config.data_dir);
    let repo = web::Data::new(WardrobeRepository::open(storage, WARDROBE_STORAGE_KEY));
    let tera = web::Data::new(tera);

    // Flash cookies are signed but short-lived; a per-process key suffices
    // for a single-instance deployment.
    let message_store = CookieMessageStore::builder(Key::generate()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    log::info!("Starting SmartFit server at http://{}", server_config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .app_data(repo.clone())
            .app_data(tera.clone())
            .service(routes::main::index)
            .service(routes::items::upload_item)
            .service(routes::items::remove_item)
            .service(routes::outfits::suggest_outfit)
            .service(
                web::scope("/api")
                    .service(routes::api::api_v1_wardrobe)
                    .service(routes::api::api_v1_outfit),
            )
            .service(Files::new("/static", "static"))
    })
    .bind(&server_config.bind_address)?
    .run()
    .await
}
