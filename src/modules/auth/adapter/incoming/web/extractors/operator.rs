use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// The authenticated site operator. Admits a request only when the bearer
/// token matches the gate's current, unexpired session. Mutation routes take
/// this as a parameter; public reads do not.
#[derive(Debug, Clone)]
pub struct Operator {
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for Operator {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match req.app_data::<actix_web::web::Data<AppState>>() {
            Some(state) => state,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match state.auth.session() {
            Some(session) if session.token == token => ready(Ok(Operator {
                email: session.operator,
            })),
            _ => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_SESSION",
                "Invalid or expired session",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
