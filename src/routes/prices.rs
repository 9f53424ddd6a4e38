use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::forms::prices::PriceQueryForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, prices as price_service};

/// JSON error payload returned for failed price queries.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    error: &'static str,
    message: String,
}

impl ErrorBody {
    fn bad_request(message: String) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorBody {
            status: 400,
            error: "Bad Request",
            message,
        })
    }

    fn not_found(message: String) -> HttpResponse {
        HttpResponse::NotFound().json(ErrorBody {
            status: 404,
            error: "Not Found",
            message,
        })
    }
}

#[get("/v1/prices")]
/// Return the single price applicable to a product and brand at an instant.
///
/// Malformed parameters and non-positive identifiers map to `400`; a valid
/// query with no applicable price maps to `404`; store failures map to `500`
/// with details kept in the server log.
pub async fn get_applicable_price(
    params: web::Query<PriceQueryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = match params.into_inner().into_query() {
        Ok(query) => query,
        Err(err) => {
            log::warn!("Rejected price query: {err}");
            return ErrorBody::bad_request(err.to_string());
        }
    };

    match price_service::resolve_applicable_price(repo.get_ref(), query) {
        Ok(price) => HttpResponse::Ok().json(price_service::PriceResponse::from(price)),
        Err(ServiceError::InvalidQuery(message)) => {
            log::warn!("Rejected price query: {message}");
            ErrorBody::bad_request(message)
        }
        Err(ServiceError::NotFound) => {
            ErrorBody::not_found("no applicable price for the given parameters".to_string())
        }
        Err(err) => {
            log::error!("Failed to resolve price: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
