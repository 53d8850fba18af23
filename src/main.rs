use dotenvy::dotenv;
use shop_service::build_server;
use shop_service::config::Config;
use shop_service::stores::Stores;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();

    log::info!(
        "Starting server at http://{}:{} (coupon interval: every {} orders)",
        config.host,
        config.port,
        config.coupon_interval
    );

    build_server(
        Stores::seeded(),
        &config.host,
        config.port,
        config.coupon_interval,
    )?
    .await
}
