use reunite_portal::models::config::ServerConfig;
use reunite_portal::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = config::Config::builder()
        .add_source(config::File::with_name("config"))
        .add_source(config::Environment::default())
        .build()
        .and_then(|settings| settings.try_deserialize::<ServerConfig>())
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    run(server_config).await
}
