use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::session::domain::entities::SessionContext;

/// Cookie the sign-in flow persists the token under.
pub const SESSION_COOKIE: &str = "authToken";

impl FromRequest for SessionContext {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = extract_token_from_header(req)
            .or_else(|| extract_token_from_cookie(req))
            .map(|token| SessionContext::with_token(token))
            .unwrap_or_else(SessionContext::anonymous);

        ready(Ok(session))
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

fn extract_token_from_cookie(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE).map(|c| c.value().to_string())
}
