use axum::{
    Form, Json, Router,
    extract::State,
    middleware,
    routing::{get, post},
};
use chrono::Utc;
use paygate_auth::auth_body::AuthBody;
use paygate_models::db::connection::DbConnection;
use paygate_web::{
    auth_token::authenticate,
    ctx::{
        ActiveUser,
        resolver::{mw_ctx_resolver, remember_token},
    },
    mw_auth::mw_require_auth,
    salary::{SalaryInfo, get_salary},
    user::{ApiResponse, UserPost, create_user},
};
use serde::Deserialize;
use tokio::task::JoinHandle;
use tower_cookies::{CookieManagerLayer, Cookies};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::prelude::*;
use paygate_web::prelude::Result as WebResult;

/// OAuth2 password-form fields accepted by the auth route.
#[derive(Debug, Deserialize)]
struct AuthForm {
    username: String,
    password: String,
}

fn bind_address() -> String {
    let host = std::env::var("APP_HOST").unwrap_or_else(|_| String::from("127.0.0.1"));
    let port = std::env::var("APP_PORT").unwrap_or_else(|_| String::from("3000"));
    format!("{host}:{port}")
}

pub async fn setup_api(db: DbConnection) -> Result<JoinHandle<Result<()>>> {
    let gated_routes = Router::new()
        .route("/salary", get(salary))
        .route_layer(middleware::from_fn(mw_require_auth));

    let app = Router::new()
        .merge(gated_routes)
        .route("/auth", post(auth))
        .route("/user/add", post(add_user))
        .route("/ping", get(ping))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(db.clone(), mw_ctx_resolver))
        .layer(CookieManagerLayer::new())
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(bind_address()).await?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await?;
        Ok(())
    });

    Ok(handle)
}

async fn auth(
    State(db): State<DbConnection>,
    cookies: Cookies,
    Form(payload): Form<AuthForm>,
) -> WebResult<Json<AuthBody>> {
    let body = authenticate(&db, &payload.username, &payload.password, Utc::now())?;
    remember_token(&body, &cookies);
    Ok(Json(body))
}

async fn add_user(
    State(db): State<DbConnection>,
    Json(payload): Json<UserPost>,
) -> WebResult<Json<ApiResponse>> {
    Ok(Json(create_user(payload, &db)?))
}

async fn salary(State(db): State<DbConnection>, user: ActiveUser) -> WebResult<Json<SalaryInfo>> {
    Ok(Json(get_salary(&user, &db)?))
}

async fn ping() -> Json<ApiResponse> {
    Json(ApiResponse::new("Service is alive"))
}
