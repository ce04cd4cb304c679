use chrono::NaiveDate;

use crate::engine::Transition;
use crate::entities::order::OrderStatus;

/// Failure talking to the restaurant API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("cannot {transition} order {order_id} while it is {from}")]
    InvalidTransition {
        order_id: String,
        from: OrderStatus,
        transition: Transition,
    },
    #[error("order {order_id} already has a {pending} in flight")]
    TransitionInFlight {
        order_id: String,
        pending: Transition,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, thiserror::Error)]
pub enum DateRangeError {
    #[error("date range starts ({from}) after it ends ({to})")]
    Inverted { from: NaiveDate, to: NaiveDate },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
