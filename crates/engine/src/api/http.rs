//! HTTP routes.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};
use ucp_domain::AffiliationKind;

use crate::app::App;
use crate::infrastructure::auth::{SessionClaims, SESSION_COOKIE};
use crate::infrastructure::ports::SourceError;
use crate::use_cases::account::AccountError;
use crate::use_cases::{account, assets, leaderboard, roster};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
        .route("/api/assets", get(list_assets))
        .route("/api/leaderboard", get(wealth_leaderboard))
        .route("/api/affiliations/details", get(affiliation_details))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

async fn login(
    State(app): State<Arc<App>>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    if body.username.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Missing username or password".to_string(),
        ));
    }
    let outcome = account::login(&app, &body.username, &body.password).await?;
    let jar = jar.add(session_cookie(outcome.token));
    Ok((jar, Json(json!({ "user": outcome.profile }))))
}

async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), Json(json!({ "ok": true })))
}

async fn me(State(app): State<Arc<App>>, jar: CookieJar) -> Result<Json<Value>, ApiError> {
    let claims = session(&app, &jar)?;
    let view = account::current_user(&app, claims.id).await?;
    Ok(Json(json!({ "user": view })))
}

async fn list_assets(State(app): State<Arc<App>>, jar: CookieJar) -> Result<Json<Value>, ApiError> {
    let claims = session(&app, &jar)?;
    let properties = assets::list_properties(&app, claims.id).await?;
    Ok(Json(json!({ "properties": properties })))
}

async fn wealth_leaderboard(
    State(app): State<Arc<App>>,
    jar: CookieJar,
) -> Result<Json<Value>, ApiError> {
    session(&app, &jar)?;
    let entries = leaderboard::wealth_top(&app).await?;
    Ok(Json(json!({ "leaderboard": entries })))
}

#[derive(Debug, Deserialize)]
struct DetailsQuery {
    #[serde(rename = "type")]
    kind: String,
    id: i64,
}

async fn affiliation_details(
    State(app): State<Arc<App>>,
    jar: CookieJar,
    Query(query): Query<DetailsQuery>,
) -> Result<Json<Value>, ApiError> {
    session(&app, &jar)?;
    let kind = match query.kind.as_str() {
        "Faction" => AffiliationKind::Faction,
        "Family" => AffiliationKind::Family,
        "Group" => AffiliationKind::Group,
        "Agency" => AffiliationKind::Agency,
        _ => {
            return Err(ApiError::BadRequest(
                "Invalid affiliation type".to_string(),
            ))
        }
    };
    let members = roster::members(&app, kind, query.id).await?;
    Ok(Json(json!({ "members": members })))
}

/// Pull and verify the session cookie.
fn session(app: &App, jar: &CookieJar) -> Result<SessionClaims, ApiError> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| app.auth.verify(cookie.value()))
        .ok_or(ApiError::Unauthorized)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    BadRequest(String),
    NotFound,
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (
                axum::http::StatusCode::UNAUTHORIZED,
                "Not authenticated".to_string(),
            ),
            ApiError::BadRequest(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound => (axum::http::StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<SourceError> for ApiError {
    fn from(e: SourceError) -> Self {
        match e {
            // A missing player row behind a valid session token.
            SourceError::NotFound => ApiError::Unauthorized,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::InvalidCredentials => ApiError::Unauthorized,
            AccountError::Source(e) => e.into(),
            AccountError::Session(msg) => ApiError::Internal(msg),
        }
    }
}
