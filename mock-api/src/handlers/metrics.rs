use actix_web::{web, HttpResponse};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::state::AppState;

const MAX_PERIOD_DAYS: i64 = 7;

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

pub async fn daily_receipt_in_period(
    state: web::Data<AppState>,
    q: web::Query<PeriodQuery>,
) -> Result<HttpResponse, ApiError> {
    let to = q.to.unwrap_or_else(|| Utc::now().date_naive());
    let from = q.from.unwrap_or(to - Duration::days(MAX_PERIOD_DAYS));
    if from > to {
        return Err(ApiError::BadRequest("from must not be after to".into()));
    }
    if (to - from).num_days() > MAX_PERIOD_DAYS {
        return Err(ApiError::BadRequest(format!(
            "interval cannot be greater than {MAX_PERIOD_DAYS} days"
        )));
    }
    Ok(HttpResponse::Ok().json(state.metrics.daily_receipts(from, to)))
}

pub async fn month_receipts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.metrics.month_receipts)
}

pub async fn month_orders_amount(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.metrics.month_orders)
}

pub async fn day_orders_amount(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.metrics.day_orders)
}

pub async fn month_canceled_orders_amount(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.metrics.month_canceled)
}
