// region:    --- Imports
use super::queries;
use crate::account::model::{Session, User};
use crate::database::DatabaseManager;
use crate::listing::model::Listing;
use sqlx::Error as SqlxError;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 공고 조회
pub async fn get_listing(
    db_manager: &DatabaseManager,
    listing_id: i64,
) -> Result<Option<Listing>, SqlxError> {
    info!("{:<12} --> 공고 조회 id: {}", "Query", listing_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Listing>(queries::GET_LISTING)
                    .bind(listing_id)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// 모든 공고 조회
pub async fn get_all_listings(db_manager: &DatabaseManager) -> Result<Vec<Listing>, SqlxError> {
    info!("{:<12} --> 모든 공고 조회", "Query");
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Listing>(queries::GET_ALL_LISTINGS)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 회원별 공고 조회
pub async fn get_listings_by_owner(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Vec<Listing>, SqlxError> {
    info!("{:<12} --> 회원별 공고 조회 id: {}", "Query", user_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Listing>(queries::GET_LISTINGS_BY_OWNER)
                    .bind(user_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 회원 조회 (id)
pub async fn get_user_by_id(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Option<User>, SqlxError> {
    info!("{:<12} --> 회원 조회 id: {}", "Query", user_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(queries::GET_USER_BY_ID)
                    .bind(user_id)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// 회원 조회 (사용자 이름)
pub async fn get_user_by_username(
    db_manager: &DatabaseManager,
    username: &str,
) -> Result<Option<User>, SqlxError> {
    info!("{:<12} --> 회원 조회 username: {}", "Query", username);
    let username = username.to_string();
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(queries::GET_USER_BY_USERNAME)
                    .bind(&username)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// 회원 조회 (이메일)
pub async fn get_user_by_email(
    db_manager: &DatabaseManager,
    email: &str,
) -> Result<Option<User>, SqlxError> {
    info!("{:<12} --> 회원 조회 email: {}", "Query", email);
    let email = email.to_string();
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(queries::GET_USER_BY_EMAIL)
                    .bind(&email)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// 세션 조회
pub async fn get_session(
    db_manager: &DatabaseManager,
    token: &str,
) -> Result<Option<Session>, SqlxError> {
    info!("{:<12} --> 세션 조회", "Query");
    let token = token.to_string();
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Session>(queries::GET_SESSION)
                    .bind(&token)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

// endregion: --- Query Handlers
