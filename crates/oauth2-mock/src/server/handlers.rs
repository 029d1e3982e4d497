//! Route handlers for the mock authorization flow.
//!
//! Three live endpoints plus a logging 404 fallback:
//! - `GET/POST /authorize`: render the claim-editing form
//! - `POST /submit`: redirect back to the client with `code` and `state`
//! - `POST /token`: exchange the claim blob for a signed JWT

use std::sync::Arc;

use axum::{
    Router,
    extract::{RawForm, State, rejection::RawFormRejection},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use url::Url;

use super::page;
use crate::claims;
use crate::config::Config;
use crate::error::RequestError;
use crate::token::{self, TokenResponse};

/// Create the HTTP router.
pub fn create_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/authorize", get(handle_authorize).post(handle_authorize))
        .route("/submit", post(handle_submit))
        .route("/token", post(handle_token))
        .fallback(handle_fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Decode a urlencoded query/body, surfacing any failure as a 400.
///
/// `RawForm` reads the query string on GET and the body otherwise, matching
/// how a generic form parse behaves. Bodies must be valid UTF-8; the
/// urlencoded layer itself is lenient about stray percent signs.
fn decode_form<T: serde::de::DeserializeOwned>(
    form: Result<RawForm, RawFormRejection>,
) -> Result<T, RequestError> {
    let RawForm(bytes) = form.map_err(|err| RequestError::Form(err.to_string()))?;
    let text =
        std::str::from_utf8(&bytes).map_err(|err| RequestError::Form(err.to_string()))?;
    serde_urlencoded::from_str(text).map_err(|err| RequestError::Form(err.to_string()))
}

/// `GET/POST /authorize`
///
/// Echo every received parameter and render the submit form, pre-filled
/// with the request's `redirect_uri` and `state` plus the demo claims.
async fn handle_authorize(
    form: Result<RawForm, RawFormRejection>,
) -> Result<Response, RequestError> {
    let params: Vec<(String, String)> = decode_form(form)?;

    let html = page::render_authorize_page(&params, claims::DEMO_CLAIMS);
    Ok(Html(html).into_response())
}

#[derive(Debug, Deserialize)]
struct SubmitForm {
    #[serde(default)]
    redirect_uri: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    claims: String,
}

/// `POST /submit`
///
/// Append `state` and a `code` parameter (the submitted claim blob) to the
/// redirect URI's existing query, then 307 to it.
async fn handle_submit(
    form: Result<RawForm, RawFormRejection>,
) -> Result<Response, RequestError> {
    let form: SubmitForm = decode_form(form)?;

    let mut target = Url::parse(&form.redirect_uri)?;
    target
        .query_pairs_mut()
        .append_pair("state", &form.state)
        .append_pair("code", &form.claims);

    tracing::info!(location = %target, "redirecting back to client");

    Ok((
        StatusCode::TEMPORARY_REDIRECT,
        [(header::LOCATION, target.to_string())],
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
struct TokenForm {
    #[serde(default)]
    code: String,
}

/// `POST /token`
///
/// Parse the `code` field as claim lines, sign them as an HS512 JWT with a
/// fresh `exp`, and return `{expires_in, access_token}`.
async fn handle_token(
    State(config): State<Arc<Config>>,
    form: Result<RawForm, RawFormRejection>,
) -> Result<Response, RequestError> {
    let form: TokenForm = decode_form(form)?;

    let claim_pairs = claims::parse_claim_lines(&form.code);
    let access_token =
        token::issue_token(claim_pairs, &config.signing_secret, config.token_ttl.as_secs())?;

    let body = serde_json::to_string(&TokenResponse {
        expires_in: config.token_ttl.as_secs(),
        access_token,
    })?;

    tracing::info!(body = %body, "JWT response");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Fallback for unmatched paths: log and 404.
async fn handle_fallback(uri: Uri) -> Response {
    let path = uri.path();
    tracing::error!(path = %path, "no route for path");
    (StatusCode::NOT_FOUND, format!("Path {path} not found")).into_response()
}
