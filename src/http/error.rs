use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::AuthError;
use crate::product_actor::ProductError;
use crate::sale_actor::SaleError;

/// Error surfaced at the HTTP boundary as a status code plus a JSON message.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Credenciales inválidas")]
    InvalidCredentials,
    #[error("Producto no encontrado")]
    ProductNotFound,
    #[error("Stock insuficiente")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("La cantidad debe ser mayor a 0")]
    InvalidQuantity,
    #[error("{0}")]
    BadRequest(String),
    #[error("Error interno: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(rename = "disponible", skip_serializing_if = "Option::is_none")]
    pub available: Option<u32>,
    #[serde(rename = "solicitado", skip_serializing_if = "Option::is_none")]
    pub requested: Option<u32>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::ProductNotFound => StatusCode::NOT_FOUND,
            ApiError::InsufficientStock { .. } | ApiError::InvalidQuantity | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let (requested, available) = match self {
            ApiError::InsufficientStock { requested, available } => (Some(requested), Some(available)),
            _ => (None, None),
        };
        let body = ErrorBody { success: false, message: self.to_string(), available, requested };
        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
        }
    }
}

impl From<SaleError> for ApiError {
    fn from(err: SaleError) -> Self {
        match err {
            SaleError::ProductNotFound(_) => ApiError::ProductNotFound,
            SaleError::InsufficientStock { requested, available } => {
                ApiError::InsufficientStock { requested, available }
            }
            SaleError::InvalidQuantity(_) => ApiError::InvalidQuantity,
            SaleError::ValidationError(msg) => ApiError::BadRequest(msg),
            SaleError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::ProductNotFound,
            ProductError::InsufficientStock { requested, available } => {
                ApiError::InsufficientStock { requested, available }
            }
            ProductError::InvalidQuantity(_) => ApiError::InvalidQuantity,
            ProductError::PriceOverflow { .. } | ProductError::InvalidProduct(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ProductError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}
