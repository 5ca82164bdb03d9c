//! Shared fixtures for handler tests.

use actix_web::{
    body::MessageBody,
    cookie::Cookie,
    dev::ServiceResponse,
    test,
};

use crate::auth::{auth::session_cookie, jwt::generate_session_token};
use crate::config::Config;

/// Builds the full route table over the given store and config.
macro_rules! test_app {
    ($store:expr, $config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::from(
                    $store.clone() as std::sync::Arc<dyn crate::store::HrStore>
                ))
                .app_data(actix_web::web::Data::new($config.clone()))
                .configure(crate::routes::configure),
        )
    };
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "SESSION_SECRET" => Some("test-session-secret".to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn logged_in(config: &Config) -> Cookie<'static> {
    let token = generate_session_token(1, "user".into(), &config.session_secret, 600).unwrap();
    session_cookie(token, 600)
}

pub fn cookie_named<B>(resp: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}
