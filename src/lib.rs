pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod stores;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::{AnalyticsService, CartService, CheckoutService, CouponService, IdentityService};
use stores::{SharedStores, Stores};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::cart::add_to_cart,
        handlers::cart::remove_from_cart,
        handlers::checkout::checkout,
        handlers::admin::generate_coupon,
        handlers::admin::get_analytics,
    ),
    components(schemas(
        handlers::cart::CartItemRequest,
        handlers::cart::CartLineResponse,
        handlers::cart::CartResponse,
        handlers::cart::CartEnvelope,
        handlers::checkout::CheckoutRequest,
        handlers::checkout::CheckoutResponse,
        handlers::admin::GenerateCouponRequest,
        handlers::admin::GenerateCouponResponse,
        handlers::admin::AnalyticsResponse,
    )),
    tags(
        (name = "cart", description = "Cart mutation"),
        (name = "checkout", description = "Order placement"),
        (name = "admin", description = "Analytics and coupon issuance"),
    )
)]
pub struct ApiDoc;

/// Wires the services and routes onto an actix `ServiceConfig`. Shared
/// between `build_server` and the integration tests so both run the exact
/// same app.
pub fn configure_app(cfg: &mut web::ServiceConfig, stores: SharedStores, coupon_interval: u64) {
    cfg.app_data(web::Data::new(IdentityService::new(stores.clone())))
        .app_data(web::Data::new(CartService::new(stores.clone())))
        .app_data(web::Data::new(CheckoutService::new(
            stores.clone(),
            coupon_interval,
        )))
        .app_data(web::Data::new(CouponService::new(
            stores.clone(),
            coupon_interval,
        )))
        .app_data(web::Data::new(AnalyticsService::new(stores)))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/cart")
                        .route("/add", web::post().to(handlers::cart::add_to_cart))
                        .route("/remove", web::post().to(handlers::cart::remove_from_cart)),
                )
                .route("/checkout", web::post().to(handlers::checkout::checkout))
                .service(
                    web::scope("/admin")
                        .route("/coupons", web::post().to(handlers::admin::generate_coupon))
                        .route("/analytics", web::get().to(handlers::admin::get_analytics)),
                ),
        );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or spawning) the returned
/// server.
pub fn build_server(
    stores: Stores,
    host: &str,
    port: u16,
    coupon_interval: u64,
) -> std::io::Result<actix_web::dev::Server> {
    let shared = stores.into_shared();
    Ok(HttpServer::new(move || {
        let shared = shared.clone();
        App::new()
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(|cfg| configure_app(cfg, shared, coupon_interval))
    })
    .bind((host.to_string(), port))?
    .run())
}
