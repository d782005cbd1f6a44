//! Bearer-token gate protecting the employee record endpoints.
//!
//! The gate distinguishes two failure modes: a request that presents no
//! usable `Authorization: Bearer` header at all (401), and a request whose
//! token fails signature or expiry verification (403). A passing request
//! gets an [`AuthContext`] injected into its extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::handle_domain_error;
use ems_core::errors::DomainError;
use ems_core::services::token::{Claims, TokenService};

/// Identity established for a request that passed the gate.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id from the token's subject claim
    pub user_id: i64,
    /// Username embedded at issuance
    pub username: String,
}

impl AuthContext {
    fn from_claims(claims: &Claims) -> Option<Self> {
        let user_id = claims.user_id().ok()?;
        Some(Self {
            user_id,
            username: claims.username.clone(),
        })
    }
}

/// Bearer-token middleware factory.
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Create a gate verifying against the given token service.
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Bearer-token middleware service.
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(reject(
                        req,
                        handle_domain_error(DomainError::Unauthenticated),
                    ));
                }
            };

            // Expired and tampered tokens get the same client-facing
            // rejection; the variant only matters for the log line.
            let claims = match token_service.verify(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    log::warn!("Token rejected: {}", e);
                    return Ok(reject(req, handle_domain_error(e)));
                }
            };

            let auth_context = match AuthContext::from_claims(&claims) {
                Some(context) => context,
                None => {
                    log::warn!("Token carried a non-numeric subject");
                    return Ok(reject(req, handle_domain_error(DomainError::Forbidden)));
                }
            };

            req.extensions_mut().insert(auth_context);

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn reject<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    let (request, _payload) = req.into_parts();
    ServiceResponse::new(request, response).map_into_right_body()
}

/// Extracts the Bearer token from the Authorization header.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for handlers that need the authenticated identity.
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required."));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("token_123".to_string()));

        let req_no_scheme = TestRequest::default()
            .insert_header((AUTHORIZATION, "token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_scheme), None);

        let req_no_header = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
