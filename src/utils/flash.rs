//! One-shot messages carried across a redirect in a signed cookie.

use actix_web::{
    HttpRequest, HttpResponse,
    cookie::{Cookie, SameSite},
    http::header::LOCATION,
};
use tracing::debug;

use crate::auth::jwt::{now, sign, verify};
use crate::error::AppError;
use crate::models::{FlashClaims, FlashLevel};

pub const FLASH_COOKIE: &str = "hr_flash";

/// Unread flashes expire after this many seconds.
const FLASH_TTL: usize = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub message: String,
    pub level: FlashLevel,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: FlashLevel::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: FlashLevel::Info,
        }
    }
}

/// `302 Found` to `location`, carrying `flash` for the next rendered page.
pub fn redirect_with_flash(
    location: &str,
    flash: Flash,
    secret: &str,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Found()
        .insert_header((LOCATION, location))
        .cookie(flash_cookie(flash, secret)?)
        .finish())
}

pub fn flash_cookie(flash: Flash, secret: &str) -> Result<Cookie<'static>, AppError> {
    let claims = FlashClaims {
        message: flash.message,
        level: flash.level,
        exp: now() + FLASH_TTL,
    };
    let token = sign(&claims, secret)?;

    Ok(Cookie::build(FLASH_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish())
}

/// Reads the pending flash, if any. The caller is responsible for clearing
/// the cookie on the response it renders.
pub fn peek(req: &HttpRequest, secret: &str) -> Option<Flash> {
    let cookie = req.cookie(FLASH_COOKIE)?;
    match verify::<FlashClaims>(cookie.value(), secret) {
        Ok(claims) => Some(Flash {
            message: claims.message,
            level: claims.level,
        }),
        Err(e) => {
            debug!(error = %e, "Ignoring invalid flash cookie");
            None
        }
    }
}

pub fn has_cookie(req: &HttpRequest) -> bool {
    req.cookie(FLASH_COOKIE).is_some()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
