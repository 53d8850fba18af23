use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{AnalyticsService, CouponService, IdentityService};
use crate::errors::AppError;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCouponRequest {
    pub user_id: u64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCouponResponse {
    pub coupon_code: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsParams {
    pub user_id: u64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_items_purchased: u64,
    pub total_purchase_amount: String,
    pub discount_codes: Vec<String>,
    pub total_discount_amount: String,
}

/// POST /api/admin/coupons
///
/// Admin-triggered coupon issuance for the current interval boundary.
#[utoipa::path(
    post,
    path = "/api/admin/coupons",
    request_body = GenerateCouponRequest,
    responses(
        (status = 200, description = "Coupon issued", body = GenerateCouponResponse),
        (status = 401, description = "Unknown user"),
        (status = 403, description = "Caller is not an admin"),
        (status = 409, description = "Order count is not on an interval boundary"),
    ),
    tag = "admin"
)]
pub async fn generate_coupon(
    identity: web::Data<IdentityService>,
    coupons: web::Data<CouponService>,
    body: web::Json<GenerateCouponRequest>,
) -> Result<HttpResponse, AppError> {
    let user = identity.resolve(body.user_id)?;
    let coupon_code = coupons.issue_for_admin(&user)?;
    Ok(HttpResponse::Ok().json(GenerateCouponResponse { coupon_code }))
}

/// GET /api/admin/analytics
///
/// Summary statistics over all orders. Admin only.
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    params(
        ("userId" = u64, Query, description = "Caller's user id"),
    ),
    responses(
        (status = 200, description = "Order analytics", body = AnalyticsResponse),
        (status = 401, description = "Unknown user"),
        (status = 403, description = "Caller is not an admin"),
    ),
    tag = "admin"
)]
pub async fn get_analytics(
    identity: web::Data<IdentityService>,
    analytics: web::Data<AnalyticsService>,
    query: web::Query<AnalyticsParams>,
) -> Result<HttpResponse, AppError> {
    let user = identity.resolve(query.user_id)?;
    let report = analytics.compute(&user)?;
    Ok(HttpResponse::Ok().json(AnalyticsResponse {
        total_items_purchased: report.total_items_purchased,
        total_purchase_amount: report.total_purchase_amount.to_string(),
        discount_codes: report.discount_codes,
        total_discount_amount: report.total_discount_amount.to_string(),
    }))
}
