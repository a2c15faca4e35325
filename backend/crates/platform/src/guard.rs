//! Route Guard Chain
//!
//! Every protected route carries an ordered list of [`Guard`]s. A single
//! middleware, [`enforce`], runs them in list order and only calls the
//! handler when all of them pass, so the order (validation, then
//! authentication, then authorization) is part of the route definition.
//!
//! ## Usage
//! ```ignore
//! let chain = GuardChain::new(tokens)
//!     .validate(CREATE_USER)
//!     .authenticate()
//!     .authorize(&[UserRole::Admin]);
//!
//! Router::new().route(
//!     "/",
//!     post(create_user).route_layer(middleware::from_fn_with_state(chain, enforce)),
//! );
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::rejection::{BytesRejection, FailedToBufferBody};
use axum::extract::{FromRequest, FromRequestParts, Query, RawPathParams, Request, State};
use axum::http::{HeaderValue, header, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::{AppError, AppResult};
use kernel::role::UserRole;
use kernel::validation::{Location, RequestInput, RuleSet, validate};

use crate::client::extract_bearer_token;
use crate::token::{Claims, TokenService};

/// Request body limit the application installs with `DefaultBodyLimit` (10 MiB)
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// One step of a route's guard chain
#[derive(Debug, Clone, Copy)]
pub enum Guard {
    /// Check the request against a rule table, sanitizing the body
    Validate(&'static RuleSet),
    /// Require a valid bearer token and attach its [`Claims`]
    Authenticate,
    /// Require attached claims whose role is in the set
    Authorize(&'static [UserRole]),
}

/// Ordered guards for one route
#[derive(Clone)]
pub struct GuardChain {
    tokens: Arc<TokenService>,
    guards: Vec<Guard>,
}

impl GuardChain {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self {
            tokens,
            guards: Vec::new(),
        }
    }

    pub fn validate(mut self, rules: &'static RuleSet) -> Self {
        self.guards.push(Guard::Validate(rules));
        self
    }

    pub fn authenticate(mut self) -> Self {
        self.guards.push(Guard::Authenticate);
        self
    }

    pub fn authorize(mut self, roles: &'static [UserRole]) -> Self {
        self.guards.push(Guard::Authorize(roles));
        self
    }

    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    /// Run every guard in order, stopping at the first rejection
    pub async fn check(&self, mut req: Request) -> AppResult<Request> {
        for guard in &self.guards {
            req = match *guard {
                Guard::Validate(rules) => validate_request(rules, req).await?,
                Guard::Authenticate => self.authenticate_request(req)?,
                Guard::Authorize(roles) => authorize_request(req, roles)?,
            };
        }
        Ok(req)
    }

    fn authenticate_request(&self, mut req: Request) -> AppResult<Request> {
        let claims = {
            let token = extract_bearer_token(req.headers()).map_err(|e| {
                tracing::debug!(error = %e, path = %req.uri().path(), "No bearer token");
                AppError::unauthorized("Access token required")
            })?;

            self.tokens.verify(token).map_err(|e| {
                tracing::warn!(error = %e, "Token verification failed");
                AppError::unauthorized("Invalid or expired token").with_source(e)
            })?
        };

        req.extensions_mut().insert(claims);
        Ok(req)
    }
}

/// Middleware running a [`GuardChain`] in front of a handler
pub async fn enforce(State(chain): State<GuardChain>, req: Request, next: Next) -> Response {
    match chain.check(req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

fn authorize_request(req: Request, roles: &[UserRole]) -> AppResult<Request> {
    let Some(claims) = req.extensions().get::<Claims>() else {
        return Err(AppError::unauthorized("Unauthorized access"));
    };

    if !roles.contains(&claims.role) {
        tracing::warn!(
            user_id = claims.id,
            role = %claims.role,
            path = %req.uri().path(),
            "Insufficient permissions"
        );
        return Err(AppError::forbidden("Insufficient permissions"));
    }

    Ok(req)
}

async fn validate_request(rules: &RuleSet, req: Request) -> AppResult<Request> {
    let (mut parts, body) = req.into_parts();

    let mut input = RequestInput {
        query: query_params(&parts),
        path: path_params(&mut parts).await,
        ..Default::default()
    };

    let reads_body = rules.iter().any(|r| r.location == Location::Body);
    if !reads_body {
        validate(rules, &mut input).map_err(AppError::validation)?;
        return Ok(Request::from_parts(parts, body));
    }

    // The buffered copy carries the request's extensions so the router's
    // `DefaultBodyLimit` applies.
    let mut buffered = Request::new(body);
    *buffered.extensions_mut() = parts.extensions.clone();
    let bytes = Bytes::from_request(buffered, &())
        .await
        .map_err(body_read_error)?;

    input.body = if bytes.is_empty() {
        serde_json::Value::Object(Default::default())
    } else {
        serde_json::from_slice(&bytes)?
    };

    if let Err(errors) = validate(rules, &mut input) {
        tracing::debug!(
            path = %parts.uri.path(),
            failed_fields = errors.len(),
            "Request validation failed"
        );
        return Err(AppError::validation(errors));
    }

    // Hand the sanitized body on; an empty body stays empty.
    let body = if bytes.is_empty() {
        Bytes::new()
    } else {
        let sanitized = serde_json::to_vec(&input.body)?;
        parts.headers.insert(header::CONTENT_LENGTH, HeaderValue::from(sanitized.len()));
        Bytes::from(sanitized)
    };

    Ok(Request::from_parts(parts, Body::from(body)))
}

fn body_read_error(rejection: BytesRejection) -> AppError {
    match rejection {
        BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
            AppError::payload_too_large("Request body too large")
        }
        other => {
            tracing::debug!(error = %other, "Failed to read request body");
            AppError::bad_request("Failed to read request body")
        }
    }
}

fn query_params(parts: &Parts) -> HashMap<String, String> {
    Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
        .map(|Query(params)| params)
        .unwrap_or_default()
}

async fn path_params(parts: &mut Parts) -> HashMap<String, String> {
    RawPathParams::from_request_parts(parts, &())
        .await
        .map(|params| {
            params
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}
