use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{CartService, IdentityService};
use crate::domain::cart::{CartSnapshot, RemoveOutcome};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub user_id: u64,
    pub product_id: u64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLineResponse {
    pub product_id: u64,
    pub name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "2000"
    pub price: String,
    pub quantity: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub cart_id: u64,
    pub user_id: u64,
    pub products: Vec<CartLineResponse>,
    pub cart_total: String,
}

/// `cart` is null when a removal emptied and deleted the cart.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartEnvelope {
    pub cart: Option<CartResponse>,
}

impl From<CartSnapshot> for CartResponse {
    fn from(snap: CartSnapshot) -> Self {
        Self {
            cart_id: snap.cart_id,
            user_id: snap.user_id,
            products: snap
                .items
                .into_iter()
                .map(|i| CartLineResponse {
                    product_id: i.product_id,
                    name: i.name,
                    price: i.price.to_string(),
                    quantity: i.quantity,
                })
                .collect(),
            cart_total: snap.cart_total.to_string(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/cart/add
///
/// Adds one unit of the product to the caller's active cart (creating the
/// cart if needed) and decrements catalog stock.
#[utoipa::path(
    post,
    path = "/api/cart/add",
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Updated cart", body = CartEnvelope),
        (status = 401, description = "Unknown user"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product out of stock"),
    ),
    tag = "cart"
)]
pub async fn add_to_cart(
    identity: web::Data<IdentityService>,
    carts: web::Data<CartService>,
    body: web::Json<CartItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let user = identity.resolve(body.user_id)?;
    let snapshot = carts.add_line_item(&user, body.product_id)?;
    Ok(HttpResponse::Ok().json(CartEnvelope {
        cart: Some(snapshot.into()),
    }))
}

/// POST /api/cart/remove
///
/// Removes one unit of the product from the caller's active cart and returns
/// the stock. Responds with `cart: null` when the removal deleted the cart.
#[utoipa::path(
    post,
    path = "/api/cart/remove",
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Updated cart, or null when deleted", body = CartEnvelope),
        (status = 401, description = "Unknown user"),
        (status = 404, description = "Product not found, no active cart, or item not in cart"),
    ),
    tag = "cart"
)]
pub async fn remove_from_cart(
    identity: web::Data<IdentityService>,
    carts: web::Data<CartService>,
    body: web::Json<CartItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let user = identity.resolve(body.user_id)?;
    let cart = match carts.remove_line_item(&user, body.product_id)? {
        RemoveOutcome::Updated(snapshot) => Some(snapshot.into()),
        RemoveOutcome::CartDeleted => None,
    };
    Ok(HttpResponse::Ok().json(CartEnvelope { cart }))
}
