pub mod resources;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, http::StatusCode, web,
};
use serde::Serialize;

use crate::store::StoreError;

pub fn api_services() -> impl HttpServiceFactory {
    // health_check is registered first so it isn't taken for a collection
    (
        health_check,
        resources::list_records,
        resources::create_record,
        resources::get_record,
        resources::patch_record,
        resources::delete_record,
    )
}

/// Make request body parse failures answer in the same JSON shape as every
/// other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        APIError::BadRequest(anyhow::anyhow!("{err}")).into()
    })
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

/// Error body understood by the storefront client.
#[derive(Serialize)]
struct ErrorMessage {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let message = match self {
            Self::BadRequest(e) | Self::NotFound(e) => format!("{e}"),
            Self::UnexpectedError(e) => {
                tracing::error!("{e:#}");
                self.to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(ErrorMessage { message })
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UnknownCollection(_)
            | StoreError::RecordNotFound(..) => APIError::NotFound(e.into()),
            StoreError::NotAnObject
            | StoreError::MissingReference(_)
            | StoreError::DanglingReference(..)
            | StoreError::ForeignPhoneLine { .. } => {
                APIError::BadRequest(e.into())
            }
        }
    }
}
