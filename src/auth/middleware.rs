use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::LOCATION,
    middleware::Next,
    web::Data,
};
use tracing::debug;

use crate::auth::auth::{SESSION_COOKIE, SessionUser};
use crate::auth::jwt::verify_session_token;
use crate::config::Config;

/// Lets a request through only with a valid session cookie. Anything else is
/// sent back to the login page.
pub async fn require_session(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?;

    let claims = req
        .cookie(SESSION_COOKIE)
        .map(|cookie| verify_session_token(cookie.value(), &config.session_secret));

    let claims = match claims {
        Some(Ok(claims)) => claims,
        Some(Err(e)) => {
            debug!(error = %e, path = %req.path(), "Rejected session cookie");
            return Ok(req.into_response(to_login()));
        }
        None => {
            debug!(path = %req.path(), "No session cookie");
            return Ok(req.into_response(to_login()));
        }
    };

    req.extensions_mut().insert(SessionUser::from(claims));

    next.call(req).await
}

fn to_login() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, "/"))
        .finish()
}
