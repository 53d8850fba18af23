use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{CheckoutService, IdentityService};
use crate::errors::AppError;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub user_id: u64,
    /// Optional coupon code, at most 6 characters.
    pub coupon_code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// Amount charged; discounted when a coupon applied.
    pub total: String,
    /// Code of a freshly issued nth-order coupon, or "" off the boundary.
    pub coupon_code: String,
}

/// POST /api/checkout
///
/// Turns the caller's active cart into an order. The cart is retained and
/// flagged ordered; every nth order issues a new coupon returned in the
/// response.
#[utoipa::path(
    post,
    path = "/api/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed", body = CheckoutResponse),
        (status = 400, description = "Coupon code longer than 6 characters"),
        (status = 401, description = "Unknown user"),
        (status = 404, description = "No active cart or coupon not found"),
        (status = 409, description = "Coupon expired"),
    ),
    tag = "checkout"
)]
pub async fn checkout(
    identity: web::Data<IdentityService>,
    service: web::Data<CheckoutService>,
    body: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let user = identity.resolve(body.user_id)?;
    let receipt = service.checkout(&user, body.coupon_code.as_deref())?;
    Ok(HttpResponse::Ok().json(CheckoutResponse {
        total: receipt.total.to_string(),
        coupon_code: receipt.coupon_code,
    }))
}
