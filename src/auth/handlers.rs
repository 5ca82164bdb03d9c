use actix_web::{HttpRequest, HttpResponse, http::header::LOCATION, web};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::{
    auth::{
        auth::{clear_session_cookie, session_cookie},
        jwt::generate_session_token,
        password::{hash_password, verify_password},
    },
    config::Config,
    error::AppError,
    models::LoginForm,
    store::HrStore,
    utils::flash::{Flash, flash_cookie},
    views::{Page, forms},
};

pub const LOGIN_FAILED: &str = "Incorrect username or password";

/// Seeds the configured login account when no user by that name exists.
pub async fn ensure_login_account(store: &dyn HrStore, config: &Config) -> Result<()> {
    let existing = store
        .find_user(&config.login_username)
        .await
        .context("Failed to look up login account")?;

    if existing.is_some() {
        debug!(username = %config.login_username, "Login account already present");
        return Ok(());
    }

    let hashed = hash_password(&config.login_password)
        .map_err(|e| anyhow::anyhow!("Failed to hash login password: {e}"))?;
    let user_id = store
        .create_user(&config.login_username, &hashed)
        .await
        .context("Failed to create login account")?;

    info!(user_id, username = %config.login_username, "Login account created");
    Ok(())
}

/// Login form
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "HTML login form", content_type = "text/html", body = String)),
    tag = "Auth"
)]
pub async fn login_page(req: HttpRequest, config: web::Data<Config>) -> HttpResponse {
    Page::new("Log in", forms::login(None))
        .without_nav()
        .render(&req, &config)
}

/// Log in
#[utoipa::path(
    post,
    path = "/",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Credentials accepted, session cookie set, redirected to /menu"),
        (status = 200, description = "Credentials rejected, login form shown again with an error", content_type = "text/html", body = String)
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(req, form, store, config),
    fields(username = %form.username)
)]
pub async fn login(
    req: HttpRequest,
    form: web::Form<LoginForm>,
    store: web::Data<dyn HrStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    info!("Login request received");

    let user = store.find_user(&form.username).await?;

    let user = match user {
        Some(user) if verify_password(&form.password, &user.password_hash) => user,
        Some(_) => {
            info!("Invalid credentials: password mismatch");
            return Ok(rejected(&req, &config));
        }
        None => {
            info!("Invalid credentials: user not found");
            return Ok(rejected(&req, &config));
        }
    };

    let token = generate_session_token(
        user.id,
        user.username.clone(),
        &config.session_secret,
        config.session_ttl,
    )?;

    info!(user_id = user.id, "Login successful");

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, "/menu"))
        .cookie(session_cookie(token, config.session_ttl))
        .finish())
}

fn rejected(req: &HttpRequest, config: &Config) -> HttpResponse {
    Page::new("Log in", forms::login(Some(LOGIN_FAILED)))
        .without_nav()
        .render(req, config)
}

/// Log out
#[utoipa::path(
    get,
    path = "/logout",
    responses((status = 302, description = "Session cookie cleared, redirected to /")),
    tag = "Auth"
)]
pub async fn logout(config: web::Data<Config>) -> Result<HttpResponse, AppError> {
    let flash = flash_cookie(Flash::info("You have been logged out"), &config.session_secret)?;

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, "/"))
        .cookie(clear_session_cookie())
        .cookie(flash)
        .finish())
}
