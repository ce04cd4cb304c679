use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use restaurant_dashboard::engine::Transition;
use restaurant_dashboard::entities::order::OrderStatus;
use serde::Serialize;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("not found")]
    NotFound,
    #[display("bad request: {}", _0)]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrBody {
            error: self.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepoErr {
    #[error("not found")]
    NotFound,
    #[error("cannot {transition} an order that is {from}")]
    PreconditionFailed {
        from: OrderStatus,
        transition: Transition,
    },
}

impl From<RepoErr> for ApiError {
    fn from(e: RepoErr) -> Self {
        match e {
            RepoErr::NotFound => Self::NotFound,
            RepoErr::PreconditionFailed { .. } => Self::BadRequest(e.to_string()),
        }
    }
}
