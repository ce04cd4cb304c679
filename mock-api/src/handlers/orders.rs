use actix_web::{web, HttpResponse};
use restaurant_dashboard::engine::Transition;
use restaurant_dashboard::entities::order::OrderListKey;
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list_orders(
    state: web::Data<AppState>,
    q: web::Query<OrderListKey>,
) -> Result<HttpResponse, ApiError> {
    let page = state.orders.list(&q).await?;
    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let order = state.orders.get_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(order))
}

async fn apply(
    state: web::Data<AppState>,
    id: String,
    transition: Transition,
) -> Result<HttpResponse, ApiError> {
    let updated = state.orders.transition(&id, transition).await?;
    info!(order_id = %id, %transition, status = %updated.status, "order transitioned");
    Ok(HttpResponse::NoContent().finish())
}

pub async fn approve_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply(state, path.into_inner(), Transition::Approve).await
}

pub async fn dispatch_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply(state, path.into_inner(), Transition::Dispatch).await
}

pub async fn deliver_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply(state, path.into_inner(), Transition::Deliver).await
}

pub async fn cancel_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply(state, path.into_inner(), Transition::Cancel).await
}
