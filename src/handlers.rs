// region:    --- Imports
use crate::account::commands::{
    authenticate_session, handle_login as command_handle_login,
    handle_logout as command_handle_logout, handle_register as command_handle_register,
    LoginCommand, RegisterCommand,
};
use crate::account::model::{User, UserProfile};
use crate::database::DatabaseManager;
use crate::directory;
use crate::listing::commands::{
    handle_create_listing as command_handle_create_listing,
    handle_promote_listing as command_handle_promote_listing, CreateListingCommand,
    PromoteListingCommand,
};
use crate::listing::model::ListingView;
use crate::listing::premium;
use crate::query;
use crate::repository::PostgresListingRepository;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Auth Helpers

/// Authorization 헤더에서 Bearer 토큰 추출
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

/// 세션 토큰 검증 후 요청 사용자 조회
async fn authenticate(
    db_manager: &DatabaseManager,
    headers: &HeaderMap,
    now: DateTime<Utc>,
) -> Result<User, Response> {
    let Some(token) = bearer_token(headers) else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "인증 토큰이 필요합니다.",
                "code": "UNAUTHORIZED"
            })),
        )
            .into_response());
    };

    authenticate_session(db_manager, &token, now)
        .await
        .map_err(|e| (StatusCode::UNAUTHORIZED, Json(e)).into_response())
}

// endregion: --- Auth Helpers

// region:    --- Command Handlers

/// 회원 가입 요청 처리
pub async fn handle_register(
    State(db_manager): State<Arc<DatabaseManager>>,
    Json(cmd): Json<RegisterCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 회원 가입 요청 처리 시작: {}", "Command", cmd.username);

    let now = Utc::now();
    match command_handle_register(cmd, &db_manager, now).await {
        Ok(user) => (StatusCode::CREATED, Json(UserProfile::from(&user))).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Json(e)).into_response(),
    }
}

/// 로그인 요청 처리
pub async fn handle_login(
    State(db_manager): State<Arc<DatabaseManager>>,
    Json(cmd): Json<LoginCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 로그인 요청 처리 시작: {}", "Command", cmd.email);

    let now = Utc::now();
    match command_handle_login(cmd, &db_manager, now).await {
        Ok((session, user)) => Json(json!({
            "token": session.token,
            "expires_at": session.expires_at,
            "user": UserProfile::from(&user)
        }))
        .into_response(),
        Err(e) => (StatusCode::UNAUTHORIZED, Json(e)).into_response(),
    }
}

/// 로그아웃 요청 처리
pub async fn handle_logout(
    State(db_manager): State<Arc<DatabaseManager>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    info!("{:<12} --> 로그아웃 요청 처리 시작", "Command");

    let Some(token) = bearer_token(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "인증 토큰이 필요합니다.",
                "code": "UNAUTHORIZED"
            })),
        )
            .into_response();
    };

    match command_handle_logout(&token, &db_manager).await {
        Ok(_) => Json(json!({"message": "로그아웃 되었습니다."})).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Json(e)).into_response(),
    }
}

/// 공고 등록 요청 처리
pub async fn handle_create_listing(
    State(db_manager): State<Arc<DatabaseManager>>,
    headers: HeaderMap,
    Json(cmd): Json<CreateListingCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 공고 등록 요청 처리 시작: {:?}", "Command", cmd);

    let now = Utc::now();
    let user = match authenticate(&db_manager, &headers, now).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let repository = PostgresListingRepository::new(Arc::clone(&db_manager));
    match command_handle_create_listing(cmd, user.id, &repository, now).await {
        Ok(listing) => {
            (StatusCode::CREATED, Json(ListingView::new(&listing, now))).into_response()
        }
        Err(e) => (StatusCode::BAD_REQUEST, Json(e)).into_response(),
    }
}

/// 프리미엄 적용 요청 바디
#[derive(Debug, Deserialize)]
pub struct PromoteBody {
    pub duration_days: i64,
}

/// 프리미엄 적용 요청 처리
pub async fn handle_promote_listing(
    State(db_manager): State<Arc<DatabaseManager>>,
    headers: HeaderMap,
    Path(listing_id): Path<i64>,
    Json(body): Json<PromoteBody>,
) -> impl IntoResponse {
    info!(
        "{:<12} --> 프리미엄 적용 요청 처리 시작 id: {}, 기간: {}일",
        "Command", listing_id, body.duration_days
    );

    let now = Utc::now();
    let user = match authenticate(&db_manager, &headers, now).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let cmd = PromoteListingCommand {
        listing_id,
        duration_days: body.duration_days,
    };

    let repository = PostgresListingRepository::new(Arc::clone(&db_manager));
    match command_handle_promote_listing(cmd, user.id, &repository, now).await {
        Ok(listing) => Json(ListingView::new(&listing, now)).into_response(),
        Err(e) if e["code"] == "NOT_FOUND" => (StatusCode::NOT_FOUND, Json(e)).into_response(),
        Err(e) if e["code"] == "FORBIDDEN" => (StatusCode::FORBIDDEN, Json(e)).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Json(e)).into_response(),
    }
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 공고 목록 조회 (활성 프리미엄 우선 정렬)
pub async fn handle_get_directory(
    State(db_manager): State<Arc<DatabaseManager>>,
) -> impl IntoResponse {
    info!("{:<12} --> 공고 목록 조회", "HandlerQuery");

    let now = Utc::now();
    match query::handlers::get_all_listings(&db_manager).await {
        Ok(listings) => {
            let ranked = directory::ranked_directory(listings, now);
            let views: Vec<ListingView> = ranked
                .iter()
                .map(|listing| ListingView::new(listing, now))
                .collect();
            Json(views).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// 공고 조회
pub async fn handle_get_listing(
    State(db_manager): State<Arc<DatabaseManager>>,
    Path(listing_id): Path<i64>,
) -> impl IntoResponse {
    info!("{:<12} --> 공고 조회 id: {}", "HandlerQuery", listing_id);

    let now = Utc::now();
    match query::handlers::get_listing(&db_manager, listing_id).await {
        Ok(Some(listing)) => Json(ListingView::new(&listing, now)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "공고를 찾을 수 없습니다.",
                "code": "NOT_FOUND"
            })),
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// 내 공고 조회
pub async fn handle_get_my_listings(
    State(db_manager): State<Arc<DatabaseManager>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    info!("{:<12} --> 내 공고 조회", "HandlerQuery");

    let now = Utc::now();
    let user = match authenticate(&db_manager, &headers, now).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match query::handlers::get_listings_by_owner(&db_manager, user.id).await {
        Ok(listings) => {
            let views: Vec<ListingView> = listings
                .iter()
                .map(|listing| ListingView::new(listing, now))
                .collect();
            Json(views).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// 프리미엄 가격표 조회
pub async fn handle_get_premium_prices() -> impl IntoResponse {
    info!("{:<12} --> 프리미엄 가격표 조회", "HandlerQuery");
    Json(premium::price_table())
}

// endregion: --- Query Handlers
