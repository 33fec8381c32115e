//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::Caller;
use crate::domain::UserRole;
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};
use crate::interfaces::http::common::{ApiError, ApiResponse};

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
}

/// Authentication state containing the JWT config
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Authenticated user information taken from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: UserRole::parse(&claims.role),
        }
    }

    pub fn to_caller(&self) -> Caller {
        Caller::new(self.user_id.clone(), self.role)
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT authentication middleware; rejects requests without a valid token.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            if claims.is_expired() {
                return auth_error_response(AuthError::ExpiredToken);
            }
            let user = AuthenticatedUser::from_claims(claims);
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(_) => auth_error_response(AuthError::InvalidToken),
    }
}

/// Optional authentication middleware
///
/// Attaches an [`AuthenticatedUser`] when a valid token is present and lets
/// every request through. Handlers that mutate take [`RequireUser`].
pub async fn optional_auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Some(token) = auth_header.and_then(extract_token) {
        if let Ok(claims) = verify_token(token, &auth_state.jwt_config) {
            if !claims.is_expired() {
                let user = AuthenticatedUser::from_claims(claims);
                request.extensions_mut().insert(user);
            }
        }
    }

    next.run(request).await
}

/// Caller attached by the auth middleware, or a 401 rejection.
///
/// Reads only request parts, so listing it before a body extractor answers
/// 401 without parsing the body.
pub struct RequireUser(pub Caller);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthenticatedUser>() {
            Some(user) => Ok(RequireUser(user.to_caller())),
            None => Err((
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Missing authentication token")),
            )),
        }
    }
}

fn auth_error_response(error: AuthError) -> Response {
    let message = match error {
        AuthError::MissingToken => "Missing authentication token",
        AuthError::InvalidToken => "Invalid authentication token",
        AuthError::ExpiredToken => "Token has expired",
    };

    let body = Json(json!({
        "success": false,
        "error": message
    }));

    (StatusCode::UNAUTHORIZED, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    use crate::infrastructure::crypto::jwt::create_token;
    use crate::test_support::test_jwt_config;

    async fn whoami(RequireUser(caller): RequireUser) -> String {
        format!("{}:{}", caller.user_id, caller.role.as_str())
    }

    fn app(strict: bool) -> Router {
        let state = AuthState {
            jwt_config: test_jwt_config(),
        };
        let router = Router::new().route("/me", get(whoami));
        if strict {
            router.layer(middleware::from_fn_with_state(state, auth_middleware))
        } else {
            router.layer(middleware::from_fn_with_state(state, optional_auth_middleware))
        }
    }

    async fn call(app: Router, auth: Option<String>) -> (StatusCode, String) {
        let mut builder = Request::builder().uri("/me");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        let resp = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn valid_token_yields_caller() {
        let token = create_token("u-1", "a@b.pl", "Admin", &test_jwt_config()).unwrap();
        for strict in [true, false] {
            let (status, body) = call(app(strict), Some(format!("Bearer {token}"))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "u-1:Admin");
        }
    }

    #[tokio::test]
    async fn missing_or_bad_token_is_unauthorized() {
        for strict in [true, false] {
            let (status, _) = call(app(strict), None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);

            let (status, _) = call(app(strict), Some("Bearer garbage".into())).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);

            let (status, _) = call(app(strict), Some("Basic abc".into())).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }
    }
}
